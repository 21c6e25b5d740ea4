//! Command-line interface for Headline Harvest.
//!
//! The scraper deliberately exposes no options: sources and output location
//! are fixed at build time. Parsing argv still gives `--help` and `--version`
//! and rejects anything else.

use clap::Parser;

/// Scrape headlines from Times of India, The Hindu BusinessLine and Indian
/// Express into `<YYYYMMDD_HHMMSS>_news_scraped.csv` in the current directory.
///
/// Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to change log verbosity.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {}
