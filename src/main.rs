//! # Headline Harvest
//!
//! Scrapes headlines from three Indian news sites and merges them into one
//! timestamped CSV file.
//!
//! ## Sources
//!
//! - Times of India, technology section
//! - The Hindu BusinessLine, front page
//! - Indian Express, "Explained" section
//!
//! ## Usage
//!
//! ```sh
//! headline_harvest
//! RUST_LOG=debug headline_harvest
//! ```
//!
//! ## Architecture
//!
//! 1. **Launch**: one browser and one shared browsing context
//! 2. **Scrape**: every source concurrently, each on its own page
//! 3. **Merge**: results joined in source order
//! 4. **Export**: `<YYYYMMDD_HHMMSS>_news_scraped.csv` in the working directory
//!
//! Failures shrink the result (field, item, selector group, source) but
//! never abort the run. A run that finds nothing writes no file.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod browser;
mod cli;
mod config;
mod models;
mod orchestrator;
mod outputs;
mod scrapers;
mod utils;

use browser::http::HttpBrowser;
use cli::Cli;
use config::LaunchOptions;
use orchestrator::RunOutcome;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_harvest starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let options = LaunchOptions::default();
    let browser = HttpBrowser::launch(options)?;

    match orchestrator::run(browser, &config::output_dir()).await? {
        RunOutcome::NoData => {
            println!("No articles scraped");
        }
        RunOutcome::Exported { path, count } => {
            info!(count, path = %path.display(), "Export complete");
            println!("Data saved to {}", path.display());
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
