//! In-memory browser engine for tests.
//!
//! Serves canned HTML per URL with optional latency, navigation failure,
//! slow element reads and stale items. Locators are resolved by the same
//! [`DomSnapshot`] the HTTP engine uses.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

use super::dom::DomSnapshot;
use super::{Browser, BrowserContext, BrowserError, BrowserResult, Locator, Page};

#[derive(Clone, Default)]
pub struct FakeSite {
    pub html: String,
    pub latency: Duration,
    pub fail_navigation: bool,
    pub read_delay: Duration,
    /// Locators (by display form) that report zero matches, as if the
    /// element was removed after the group was counted.
    pub detached: HashSet<String>,
}

impl FakeSite {
    pub fn new(html: &str) -> Self {
        Self {
            html: html.to_string(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_navigation: true,
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    pub fn with_detached(mut self, locator: &Locator) -> Self {
        self.detached.insert(locator.to_string());
        self
    }
}

#[derive(Clone, Default)]
pub struct FakeContext {
    sites: Rc<HashMap<String, FakeSite>>,
    pub opened: Rc<Cell<usize>>,
    pub closed: Rc<Cell<usize>>,
}

impl FakeContext {
    pub fn new(sites: impl IntoIterator<Item = (&'static str, FakeSite)>) -> Self {
        Self {
            sites: Rc::new(sites.into_iter().map(|(url, site)| (url.to_string(), site)).collect()),
            ..Self::default()
        }
    }
}

impl BrowserContext for FakeContext {
    type Page = FakePage;

    async fn new_page(&self) -> BrowserResult<FakePage> {
        self.opened.set(self.opened.get() + 1);
        Ok(FakePage {
            sites: Rc::clone(&self.sites),
            closed: Rc::clone(&self.closed),
            site: None,
            dom: None,
        })
    }
}

pub struct FakePage {
    sites: Rc<HashMap<String, FakeSite>>,
    closed: Rc<Cell<usize>>,
    site: Option<FakeSite>,
    dom: Option<DomSnapshot>,
}

impl FakePage {
    fn loaded(&self) -> BrowserResult<(&FakeSite, &DomSnapshot)> {
        match (&self.site, &self.dom) {
            (Some(site), Some(dom)) => Ok((site, dom)),
            _ => Err(BrowserError::NotNavigated),
        }
    }
}

impl Page for FakePage {
    async fn goto(&mut self, url: &str) -> BrowserResult<()> {
        let site = self.sites.get(url).cloned().unwrap_or_else(FakeSite::failing);
        tokio::time::sleep(site.latency).await;
        if site.fail_navigation {
            return Err(BrowserError::Timeout {
                what: format!("navigation to {url}"),
                after: site.latency,
            });
        }
        self.dom = Some(DomSnapshot::parse(&site.html));
        self.site = Some(site);
        Ok(())
    }

    async fn title(&self) -> BrowserResult<String> {
        self.loaded()?.1.title()
    }

    async fn count(&self, locator: &Locator) -> BrowserResult<usize> {
        let (site, dom) = self.loaded()?;
        if site.detached.contains(&locator.to_string()) {
            return Ok(0);
        }
        dom.count(locator)
    }

    async fn inner_text(&self, locator: &Locator) -> BrowserResult<String> {
        let (site, dom) = self.loaded()?;
        tokio::time::sleep(site.read_delay).await;
        dom.inner_text(locator)
    }

    async fn get_attribute(&self, locator: &Locator, name: &str) -> BrowserResult<Option<String>> {
        let (site, dom) = self.loaded()?;
        tokio::time::sleep(site.read_delay).await;
        dom.attribute(locator, name)
    }

    async fn close(self) -> BrowserResult<()> {
        self.closed.set(self.closed.get() + 1);
        Ok(())
    }
}

/// Browser wrapper around a [`FakeContext`].
pub struct FakeBrowser {
    pub context: FakeContext,
    pub closed: Rc<Cell<bool>>,
    pub fail_context: bool,
}

impl FakeBrowser {
    pub fn new(context: FakeContext) -> Self {
        Self {
            context,
            closed: Rc::new(Cell::new(false)),
            fail_context: false,
        }
    }
}

impl Browser for FakeBrowser {
    type Context = FakeContext;

    async fn new_context(&self) -> BrowserResult<FakeContext> {
        if self.fail_context {
            return Err(BrowserError::LaunchFailed("context refused".to_string()));
        }
        Ok(self.context.clone())
    }

    async fn close(self) -> BrowserResult<()> {
        self.closed.set(true);
        Ok(())
    }
}
