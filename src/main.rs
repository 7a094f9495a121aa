//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `headscan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the summary and detail reports
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use headscan::initialization::init_logger_with;
use headscan::{render_details, render_summary, run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Exits with a usage message (status 2) when no URL is given
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scan(config).await {
        Ok(report) => {
            println!("{}", "Summary".bold().underline());
            println!("{}", render_summary(&report.results));
            println!();
            println!("{}", "Details".bold().underline());
            print!("{}", render_details(&report.results));
            println!();
            println!(
                "Scanned {} URL{} ({} succeeded, {} failed) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("headscan error: {:#}", e);
            process::exit(1);
        }
    }
}
