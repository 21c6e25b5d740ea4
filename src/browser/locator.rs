//! Lazy element locators.
//!
//! A [`Locator`] is only a description of how to find elements: a chain of
//! steps that the engine resolves against the current document each time it
//! is used. Nothing is looked up when a locator is built.

use std::fmt;

/// ARIA roles usable with [`Locator::get_by_role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaRole {
    Link,
}

impl AriaRole {
    /// CSS selector list matching elements that carry this role, implicitly
    /// or explicitly.
    pub fn css(self) -> &'static str {
        match self {
            AriaRole::Link => "a[href], area[href], [role='link']",
        }
    }

    fn name(self) -> &'static str {
        match self {
            AriaRole::Link => "link",
        }
    }
}

/// One step of a locator chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Descendants of the current matches that match a CSS selector.
    Css(String),
    /// Descendants of the current matches that have an ARIA role.
    Role(AriaRole),
    /// Keep only the n-th current match (zero-based).
    Nth(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    steps: Vec<Step>,
}

impl Locator {
    /// Locator for every element in the document matching `selector`.
    pub fn new(selector: &str) -> Self {
        Self {
            steps: vec![Step::Css(selector.trim().to_string())],
        }
    }

    /// Narrow to descendants matching `selector`.
    pub fn locator(&self, selector: &str) -> Self {
        self.with(Step::Css(selector.trim().to_string()))
    }

    pub fn get_by_role(&self, role: AriaRole) -> Self {
        self.with(Step::Role(role))
    }

    pub fn nth(&self, index: usize) -> Self {
        self.with(Step::Nth(index))
    }

    pub fn first(&self) -> Self {
        self.nth(0)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn with(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" >> ")?;
            }
            match step {
                Step::Css(selector) => write!(f, "{selector}")?,
                Step::Role(role) => write!(f, "role={}", role.name())?,
                Step::Nth(index) => write!(f, "nth={index}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_chain_display() {
        let locator = Locator::new(".item")
            .nth(2)
            .locator(".title")
            .get_by_role(AriaRole::Link)
            .first();
        assert_eq!(locator.to_string(), ".item >> nth=2 >> .title >> role=link >> nth=0");
    }

    #[test]
    fn test_locator_trims_selectors() {
        let locator = Locator::new(".story_title ");
        assert_eq!(locator.steps(), &[Step::Css(".story_title".to_string())]);
    }

    #[test]
    fn test_locator_builders_do_not_mutate_parent() {
        let group = Locator::new(".item");
        let _item = group.nth(1);
        assert_eq!(group.steps().len(), 1);
    }
}
