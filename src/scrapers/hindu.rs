//! The Hindu BusinessLine front page.
//!
//! Story blocks are `div`s whose class starts with `element`; the headline is
//! the link inside the block's `.title`. The site shows no per-story date, so
//! the date column is always `N/A` and never looked up.

use std::time::Duration;

use super::NewsSource;
use super::extract::{attribute_or_na, text_or_na, title_or_na};
use crate::browser::{AriaRole, Locator, Page};
use crate::models::{NOT_AVAILABLE, Record};

const FIELD_TIMEOUT: Option<Duration> = Some(Duration::from_secs(8));

pub struct HinduBusinessLine;

impl NewsSource for HinduBusinessLine {
    const NAME: &'static str = "The Hindu BusinessLine";
    const URL: &'static str = "https://www.thehindubusinessline.com/";
    const SELECTOR_GROUPS: &'static [&'static str] = &["div[class^='element']"];

    async fn extract<P: Page>(page: &P, item: &Locator) -> Record {
        let title_link = item.locator(".title").get_by_role(AriaRole::Link).first();
        let headline = text_or_na(page, &title_link, FIELD_TIMEOUT).await;
        let link = attribute_or_na(page, &title_link, "href", FIELD_TIMEOUT).await;
        let source = title_or_na(page).await;
        Record::new(headline, link, source, NOT_AVAILABLE)
    }
}
