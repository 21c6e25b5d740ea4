//! CSV export of the merged record list.
//!
//! Files are named after the local time of the export:
//! `YYYYMMDD_HHMMSS_news_scraped.csv`, with a `Headline,Link,Source,Date`
//! header and one row per record, UTF-8 encoded.

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tokio::fs;
use tracing::{info, instrument};

use crate::models::Record;

const FILE_SUFFIX: &str = "_news_scraped.csv";

/// File name for an export taken at `now`.
pub fn export_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}", now.format("%Y%m%d_%H%M%S"), FILE_SUFFIX)
}

/// Serialize `records` into CSV bytes, header first.
pub fn to_csv(records: &[Record]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

/// Write `records` to `dir/file_name` and return the written path.
#[instrument(level = "info", skip(records), fields(count = records.len()))]
pub async fn write_records(
    records: &[Record],
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let bytes = to_csv(records)?;
    let path = dir.join(file_name);
    fs::write(&path, bytes).await?;
    info!(path = %path.display(), "Wrote CSV export");
    Ok(path)
}
