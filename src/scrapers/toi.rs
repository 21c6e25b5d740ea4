//! Times of India, technology section.
//!
//! The section page mixes three card layouts (lead stories, the list strip
//! and the "more" grid); each has an obfuscated class name. Every card
//! carries its own date line.

use std::time::Duration;

use super::NewsSource;
use super::extract::{attribute_or_na, text_or_na, title_or_na};
use crate::browser::{Locator, Page};
use crate::models::Record;

const FIELD_TIMEOUT: Option<Duration> = Some(Duration::from_secs(8));

pub struct TimesOfIndia;

impl NewsSource for TimesOfIndia {
    const NAME: &'static str = "Times of India";
    const URL: &'static str = "https://timesofindia.indiatimes.com/technology";
    const SELECTOR_GROUPS: &'static [&'static str] = &[".wAaWq", ".GLeza", ".adKsS"];

    async fn extract<P: Page>(page: &P, item: &Locator) -> Record {
        let headline = text_or_na(page, &item.locator("h5").first(), FIELD_TIMEOUT).await;
        let link = attribute_or_na(page, &item.locator("a").first(), "href", FIELD_TIMEOUT).await;
        let source = title_or_na(page).await;
        let date = text_or_na(page, &item.locator(".c6AKk").first(), FIELD_TIMEOUT).await;
        Record::new(headline, link, source, date)
    }
}
