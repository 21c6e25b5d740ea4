//! Field extraction with per-field fault isolation.
//!
//! Every function here returns a plain `String`. Whatever goes wrong while
//! reading a field (no match, several matches, missing attribute, empty text,
//! timeout, detached element) is logged at `trace` and replaced with
//! [`NOT_AVAILABLE`]. There is no retry; the first failure is final.

use std::future::Future;
use std::time::Duration;

use tracing::trace;

use crate::browser::{BrowserError, BrowserResult, Locator, Page};
use crate::models::NOT_AVAILABLE;

/// Inner text of `locator`, bounded by `timeout` when given.
pub async fn text_or_na<P: Page>(page: &P, locator: &Locator, timeout: Option<Duration>) -> String {
    let result = bounded(page.inner_text(locator), locator, timeout).await;
    or_na(result, locator, "text")
}

/// Attribute `name` of `locator`, bounded by `timeout` when given.
pub async fn attribute_or_na<P: Page>(
    page: &P,
    locator: &Locator,
    name: &str,
    timeout: Option<Duration>,
) -> String {
    let result = bounded(page.get_attribute(locator, name), locator, timeout)
        .await
        .and_then(|value| {
            value.ok_or_else(|| BrowserError::ElementNotFound {
                locator: format!("{locator} [{name}]"),
            })
        });
    or_na(result, locator, name)
}

/// The page title, used as the `source` column.
pub async fn title_or_na<P: Page>(page: &P) -> String {
    match page.title().await {
        Ok(title) if !title.trim().is_empty() => title,
        Ok(_) => {
            trace!("Page has an empty title");
            NOT_AVAILABLE.to_string()
        }
        Err(e) => {
            trace!(error = %e, "Could not read page title");
            NOT_AVAILABLE.to_string()
        }
    }
}

async fn bounded<T>(
    read: impl Future<Output = BrowserResult<T>>,
    locator: &Locator,
    timeout: Option<Duration>,
) -> BrowserResult<T> {
    match timeout {
        None => read.await,
        Some(after) => tokio::time::timeout(after, read)
            .await
            .unwrap_or_else(|_| {
                Err(BrowserError::Timeout {
                    what: locator.to_string(),
                    after,
                })
            }),
    }
}

fn or_na(result: BrowserResult<String>, locator: &Locator, field: &str) -> String {
    match result {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) => {
            trace!(%locator, field, "Field is empty");
            NOT_AVAILABLE.to_string()
        }
        Err(e) => {
            trace!(%locator, field, error = %e, "Field unavailable");
            NOT_AVAILABLE.to_string()
        }
    }
}
