//! News source scrapers.
//!
//! Each source is a [`NewsSource`] strategy: its URL, the ordered selector
//! groups that cover the layout variants its pages use, and how to turn one
//! matched element into a [`Record`]. The three sites share no markup, so
//! there is no common item extractor; what they share is the driver,
//! [`scrape`], which owns the page lifecycle and the failure boundaries.
//!
//! # Supported Sources
//!
//! | Source | Module | Date column |
//! |--------|--------|-------------|
//! | Times of India (technology) | [`toi`] | per-item date |
//! | The Hindu BusinessLine | [`hindu`] | not published, always `N/A` |
//! | Indian Express (explained) | [`express`] | not published, always `N/A` |
//!
//! # Failure boundaries
//!
//! Innermost to outermost, each absorbs only its own scope:
//!
//! 1. **Field**: [`extract`] turns a failed read into `N/A`.
//! 2. **Item**: an element that no longer resolves is logged and skipped.
//! 3. **Group**: a selector group whose lookup fails is logged; later groups
//!    still run.
//! 4. **Source**: a failed page open or navigation yields no records.
//!
//! The page is closed on every path before [`scrape`] returns.

use tracing::{debug, error, info, instrument, warn};

use crate::browser::{BrowserContext, BrowserError, Locator, Page};
use crate::models::Record;
use crate::utils::truncate_for_log;

pub mod express;
pub mod extract;
pub mod hindu;
pub mod toi;

/// Per-source scraping strategy.
#[allow(async_fn_in_trait)]
pub trait NewsSource {
    /// Short name used in logs.
    const NAME: &'static str;
    /// Entry page.
    const URL: &'static str;
    /// Selector groups, tried in order. Each matches the item containers of
    /// one layout variant.
    const SELECTOR_GROUPS: &'static [&'static str];

    /// Read one item. `item` resolves to exactly one element when called.
    async fn extract<P: Page>(page: &P, item: &Locator) -> Record;
}

/// Scrape one source end to end on a fresh page from `context`.
///
/// Never fails: anything that goes wrong is logged and reduces the result,
/// down to an empty list when the page cannot be opened or navigated.
#[instrument(level = "info", skip_all, fields(source = S::NAME, url = S::URL))]
pub async fn scrape<S: NewsSource, C: BrowserContext>(context: &C) -> Vec<Record> {
    let mut page = match context.new_page().await {
        Ok(page) => page,
        Err(e) => {
            error!(error = %e, "Could not open a page; {} scraper failed", S::NAME);
            return Vec::new();
        }
    };

    let records = match page.goto(S::URL).await {
        Ok(()) => collect_records::<S, _>(&page).await,
        Err(e) => {
            error!(error = %e, "Navigation failed; {} scraper failed", S::NAME);
            Vec::new()
        }
    };

    if let Err(e) = page.close().await {
        warn!(error = %e, "Failed to close page");
    }

    info!(count = records.len(), "Scraped {} headlines", S::NAME);
    records
}

async fn collect_records<S: NewsSource, P: Page>(page: &P) -> Vec<Record> {
    let mut records = Vec::new();

    for selector in S::SELECTOR_GROUPS {
        let group = Locator::new(selector);
        let total = match page.count(&group).await {
            Ok(total) => total,
            Err(e) => {
                warn!(%selector, error = %e, "Selector group failed in {} scraper", S::NAME);
                continue;
            }
        };

        if total == 0 {
            info!(%selector, "No elements found for selector group");
            continue;
        }
        debug!(%selector, total, "Selector group matched");

        for index in 0..total {
            match scrape_item::<S, P>(page, &group.nth(index)).await {
                Ok(record) => {
                    if record.is_blank() {
                        debug!(%selector, index, "Item produced no readable fields");
                    }
                    info!(
                        headline = %truncate_for_log(&record.headline, 120),
                        link = %record.link,
                        source = %record.source,
                        date = %record.scraped_at_date,
                        "Scraped headline"
                    );
                    records.push(record);
                }
                Err(e) => {
                    error!(%selector, index, error = %e, "Failed to extract item; skipping it");
                }
            }
        }
    }

    records
}

/// Re-resolve the item before reading it, so an element that disappeared
/// since the group was counted is reported instead of producing a record.
async fn scrape_item<S: NewsSource, P: Page>(
    page: &P,
    item: &Locator,
) -> Result<Record, BrowserError> {
    match page.count(item).await? {
        1 => Ok(S::extract(page, item).await),
        _ => Err(BrowserError::Detached {
            locator: item.to_string(),
        }),
    }
}
