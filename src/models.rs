//! Data model for scraped headlines.
//!
//! Every source, whatever its markup looks like, is normalised into the same
//! four-column [`Record`]. A field that could not be read is never dropped; it
//! holds [`NOT_AVAILABLE`] instead.

use serde::{Deserialize, Serialize};

/// Placeholder written into any field whose extraction failed.
pub const NOT_AVAILABLE: &str = "N/A";

/// One scraped headline.
///
/// The serialized column names match the CSV header the exporter writes:
/// `Headline,Link,Source,Date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Article title text.
    #[serde(rename = "Headline")]
    pub headline: String,
    /// Article URL, exactly as found in the `href` (absolute or relative).
    #[serde(rename = "Link")]
    pub link: String,
    /// Title of the page the headline was scraped from, read at scrape time.
    #[serde(rename = "Source")]
    pub source: String,
    /// Per-item date shown by the source, when it exposes one.
    #[serde(rename = "Date")]
    pub scraped_at_date: String,
}

impl Record {
    /// Build a record, degrading any empty field to [`NOT_AVAILABLE`].
    pub fn new(
        headline: impl Into<String>,
        link: impl Into<String>,
        source: impl Into<String>,
        scraped_at_date: impl Into<String>,
    ) -> Self {
        Self {
            headline: or_not_available(headline.into()),
            link: or_not_available(link.into()),
            source: or_not_available(source.into()),
            scraped_at_date: or_not_available(scraped_at_date.into()),
        }
    }

    /// `true` when every field holds the sentinel.
    pub fn is_blank(&self) -> bool {
        [&self.headline, &self.link, &self.source, &self.scraped_at_date]
            .iter()
            .all(|field| field.as_str() == NOT_AVAILABLE)
    }
}

fn or_not_available(value: String) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}
