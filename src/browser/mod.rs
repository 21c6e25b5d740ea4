//! Browser-automation capability consumed by the scrapers.
//!
//! The scrapers only need a small slice of what a browser offers: open an
//! isolated page inside a shared context, navigate it, count and read
//! elements through [`Locator`]s, read the document title, and close
//! everything again. That slice is expressed as three traits so the engine
//! can be swapped (and faked in tests) without touching the scrapers.
//!
//! The default engine is [`http::HttpBrowser`], which fetches pages with
//! `reqwest` and resolves locators against a `scraper` DOM.
//!
//! None of the traits require `Send`: all sources are driven cooperatively
//! from a single task.

use std::time::Duration;

use thiserror::Error;

pub mod dom;
pub mod http;
pub mod locator;
#[cfg(test)]
pub mod testing;

pub use locator::{AriaRole, Locator};

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Timed out after {}ms waiting for {what}", .after.as_millis())]
    Timeout { what: String, after: Duration },

    #[error("Page has no document; navigate first")]
    NotNavigated,

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("No element matches {locator}")]
    ElementNotFound { locator: String },

    #[error("{locator} resolved to {count} elements")]
    StrictModeViolation { locator: String, count: usize },

    #[error("Element {locator} is no longer attached to the document")]
    Detached { locator: String },
}

pub type BrowserResult<T> = Result<T, BrowserError>;

/// A launched browser instance.
#[allow(async_fn_in_trait)]
pub trait Browser {
    type Context: BrowserContext;

    /// Open a browsing context. Pages opened from one context share its
    /// cookies and connection pool.
    async fn new_context(&self) -> BrowserResult<Self::Context>;

    async fn close(self) -> BrowserResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait BrowserContext {
    type Page: Page;

    /// Open a fresh, unnavigated page owned by the caller.
    async fn new_page(&self) -> BrowserResult<Self::Page>;
}

/// A single tab. Every method is a suspension point.
#[allow(async_fn_in_trait)]
pub trait Page {
    /// Navigate to `url` and resolve once the DOM has been parsed. Late
    /// assets are not waited for.
    async fn goto(&mut self, url: &str) -> BrowserResult<()>;

    /// Document title; empty when the page has none.
    async fn title(&self) -> BrowserResult<String>;

    /// Number of elements `locator` currently resolves to.
    async fn count(&self, locator: &Locator) -> BrowserResult<usize>;

    /// Text of the single element `locator` resolves to.
    async fn inner_text(&self, locator: &Locator) -> BrowserResult<String>;

    /// Attribute of the single element `locator` resolves to, `None` when the
    /// element lacks it.
    async fn get_attribute(&self, locator: &Locator, name: &str) -> BrowserResult<Option<String>>;

    async fn close(self) -> BrowserResult<()>;
}
