//! Output generation.
//!
//! # Submodules
//!
//! - [`csv`]: writes the merged record list to a timestamped CSV file in the
//!   output directory
//!
//! # Output Structure
//!
//! ```text
//! ./
//! └── 20261019_070509_news_scraped.csv
//! ```

pub mod csv;
