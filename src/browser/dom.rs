//! Locator resolution against a parsed HTML document.

use std::collections::HashSet;
use std::ops::Deref;

use scraper::{ElementRef, Html, Node, Selector};

use super::BrowserError;
use super::locator::{Locator, Step};
use crate::utils::normalize_whitespace;

/// A parsed document that locators can be resolved against.
pub struct DomSnapshot {
    html: Html,
}

impl DomSnapshot {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Text of the first `<title>`, or an empty string when there is none.
    pub fn title(&self) -> Result<String, BrowserError> {
        let selector = parse_selector("title")?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .map(|el| normalize_whitespace(&el.text().collect::<String>()))
            .unwrap_or_default())
    }

    pub fn count(&self, locator: &Locator) -> Result<usize, BrowserError> {
        Ok(self.resolve(locator)?.len())
    }

    /// Rendered-ish text of the single element `locator` points at.
    pub fn inner_text(&self, locator: &Locator) -> Result<String, BrowserError> {
        let element = self.resolve_one(locator)?;
        let mut text = String::new();
        push_rendered_text(element, &mut text);
        Ok(normalize_whitespace(&text))
    }

    pub fn attribute(
        &self,
        locator: &Locator,
        name: &str,
    ) -> Result<Option<String>, BrowserError> {
        let element = self.resolve_one(locator)?;
        Ok(element.value().attr(name).map(str::to_string))
    }

    fn resolve_one(&self, locator: &Locator) -> Result<ElementRef<'_>, BrowserError> {
        let mut matches = self.resolve(locator)?;
        match matches.len() {
            0 => Err(BrowserError::ElementNotFound {
                locator: locator.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(BrowserError::StrictModeViolation {
                locator: locator.to_string(),
                count,
            }),
        }
    }

    /// All elements matched by `locator`, in document order, without
    /// duplicates.
    fn resolve(&self, locator: &Locator) -> Result<Vec<ElementRef<'_>>, BrowserError> {
        // `None` means "the whole document"
        let mut current: Option<Vec<ElementRef<'_>>> = None;
        for step in locator.steps() {
            let next = match step {
                Step::Css(selector) => {
                    self.descendants(current.as_deref(), &parse_selector(selector)?)
                }
                Step::Role(role) => {
                    self.descendants(current.as_deref(), &parse_selector(role.css())?)
                }
                Step::Nth(index) => current
                    .take()
                    .unwrap_or_default()
                    .into_iter()
                    .nth(*index)
                    .into_iter()
                    .collect(),
            };
            current = Some(next);
        }
        Ok(current.unwrap_or_default())
    }

    fn descendants(
        &self,
        scope: Option<&[ElementRef<'_>]>,
        selector: &Selector,
    ) -> Vec<ElementRef<'_>> {
        match scope {
            None => self.html.select(selector).collect(),
            Some(scope) => {
                let scope_ids: HashSet<_> =
                    scope.iter().map(|el| Deref::deref(el).id()).collect();
                self.html
                    .select(selector)
                    .filter(|el| el.ancestors().any(|a| scope_ids.contains(&a.id())))
                    .collect()
            }
        }
    }
}

/// Elements whose text a browser never renders.
const HIDDEN: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line when rendered.
const BREAKING: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "section", "article",
    "header", "footer", "aside", "nav", "figure", "figcaption", "blockquote", "table", "tr", "td",
    "th", "hr", "pre", "dl", "dt", "dd",
];

/// Append the text a browser would render for `element`: text nodes are
/// joined as-is, hidden elements are skipped, block boundaries become
/// spaces.
fn push_rendered_text(element: ElementRef<'_>, out: &mut String) {
    for child in Deref::deref(&element).children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if HIDDEN.contains(&name) {
                    continue;
                }
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let breaks = BREAKING.contains(&name);
                if breaks {
                    out.push(' ');
                }
                push_rendered_text(child, out);
                if breaks {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, BrowserError> {
    Selector::parse(selector).map_err(|e| BrowserError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
