//! Indian Express, "Explained" section.

use super::NewsSource;
use super::extract::{attribute_or_na, text_or_na, title_or_na};
use crate::browser::{Locator, Page};
use crate::models::{NOT_AVAILABLE, Record};

pub struct IndianExpress;

impl NewsSource for IndianExpress {
    const NAME: &'static str = "Indian Express";
    const URL: &'static str = "https://indianexpress.com/section/explained/";
    const SELECTOR_GROUPS: &'static [&'static str] =
        &[".story_title", ".parliament-content", ".text-cols"];

    // No per-story dates on the section page.
    async fn extract<P: Page>(page: &P, item: &Locator) -> Record {
        let anchor = item.locator("a").first();
        let headline = text_or_na(page, &anchor, None).await;
        let link = attribute_or_na(page, &anchor, "href", None).await;
        let source = title_or_na(page).await;
        Record::new(headline, link, source, NOT_AVAILABLE)
    }
}
