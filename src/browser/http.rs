//! HTTP-backed browser engine.
//!
//! Pages are fetched with `reqwest` and parsed with `scraper`. There is no
//! JavaScript, so a page is "DOM-parsed" as soon as its body has been
//! downloaded and parsed, which is exactly the state the scrapers wait for.

use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use super::dom::DomSnapshot;
use super::{Browser, BrowserContext, BrowserError, BrowserResult, Locator, Page};
use crate::config::LaunchOptions;

/// Browser instance. Owns the HTTP client that every context and page
/// shares.
pub struct HttpBrowser {
    client: Client,
    options: LaunchOptions,
}

impl HttpBrowser {
    #[instrument(level = "info", skip_all, fields(user_agent = %options.user_agent))]
    pub fn launch(options: LaunchOptions) -> BrowserResult<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.navigation_timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;
        debug!(timeout_ms = options.navigation_timeout.as_millis() as u64, "HTTP browser launched");
        Ok(Self { client, options })
    }
}

impl Browser for HttpBrowser {
    type Context = HttpContext;

    async fn new_context(&self) -> BrowserResult<HttpContext> {
        Ok(HttpContext {
            client: self.client.clone(),
            options: self.options.clone(),
        })
    }

    async fn close(self) -> BrowserResult<()> {
        debug!("HTTP browser closed");
        Ok(())
    }
}

/// Browsing context. Cheap to share by reference between concurrently
/// running scrapers.
pub struct HttpContext {
    client: Client,
    options: LaunchOptions,
}

impl BrowserContext for HttpContext {
    type Page = HttpPage;

    async fn new_page(&self) -> BrowserResult<HttpPage> {
        Ok(HttpPage {
            client: self.client.clone(),
            options: self.options.clone(),
            url: None,
            dom: None,
        })
    }
}

pub struct HttpPage {
    client: Client,
    options: LaunchOptions,
    url: Option<Url>,
    dom: Option<DomSnapshot>,
}

impl HttpPage {
    fn dom(&self) -> BrowserResult<&DomSnapshot> {
        self.dom.as_ref().ok_or(BrowserError::NotNavigated)
    }
}

impl Page for HttpPage {
    #[instrument(level = "debug", skip(self))]
    async fn goto(&mut self, url: &str) -> BrowserResult<()> {
        let parsed = Url::parse(url).map_err(|source| BrowserError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let map_err = |source: reqwest::Error| {
            if source.is_timeout() {
                BrowserError::Timeout {
                    what: format!("navigation to {url}"),
                    after: self.options.navigation_timeout,
                }
            } else {
                BrowserError::Navigation {
                    url: url.to_string(),
                    source,
                }
            }
        };

        let response = self.client.get(parsed.clone()).send().await.map_err(map_err)?;
        let status = response.status();
        if !status.is_success() {
            // A browser renders error pages too; the selectors will simply
            // find nothing on them.
            warn!(%url, %status, "Navigation returned a non-success status");
        }
        let body = response.text().await.map_err(map_err)?;
        debug!(%url, bytes = body.len(), "Document parsed");

        self.dom = Some(DomSnapshot::parse(&body));
        self.url = Some(parsed);
        Ok(())
    }

    async fn title(&self) -> BrowserResult<String> {
        self.dom()?.title()
    }

    async fn count(&self, locator: &Locator) -> BrowserResult<usize> {
        self.dom()?.count(locator)
    }

    async fn inner_text(&self, locator: &Locator) -> BrowserResult<String> {
        self.dom()?.inner_text(locator)
    }

    async fn get_attribute(&self, locator: &Locator, name: &str) -> BrowserResult<Option<String>> {
        self.dom()?.attribute(locator, name)
    }

    async fn close(self) -> BrowserResult<()> {
        debug!(url = ?self.url.as_ref().map(Url::as_str), "Page closed");
        Ok(())
    }
}
