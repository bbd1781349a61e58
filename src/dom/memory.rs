//! In-memory `DomHost` for native tests and prerendering

use std::cell::RefCell;
use std::collections::HashMap;

use super::DomHost;
use crate::errors::DomError;

#[derive(Debug, Clone, Default, PartialEq)]
struct MemoryElement {
    children: Vec<String>,
    text: String,
    display: Option<String>,
}

/// A page made of named elements that records every write
///
/// Writes to an id that was never registered fail with
/// [`DomError::MissingElement`], like `getElementById` returning null.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: RefCell<HashMap<String, MemoryElement>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page exposing the given element ids
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dom = Self::new();
        for id in ids {
            dom.add_element(id);
        }
        dom
    }

    pub fn add_element<S: Into<String>>(&self, id: S) {
        self.elements
            .borrow_mut()
            .entry(id.into())
            .or_default();
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    /// Markup fragments appended to an element, in order
    pub fn children(&self, id: &str) -> Vec<String> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.children.clone())
            .unwrap_or_default()
    }

    /// Text last written with `set_text`
    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|element| element.text.clone())
    }

    /// `display` value last set, `None` while untouched
    pub fn display(&self, id: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(id)
            .and_then(|element| element.display.clone())
    }

    fn with_element<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut MemoryElement) -> T,
    ) -> Result<T, DomError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
        Ok(f(element))
    }
}

impl DomHost for MemoryDom {
    fn append_html(&self, element_id: &str, html: &str) -> Result<(), DomError> {
        self.with_element(element_id, |element| element.children.push(html.to_string()))
    }

    fn set_display(&self, element_id: &str, display: &str) -> Result<(), DomError> {
        self.with_element(element_id, |element| {
            element.display = Some(display.to_string())
        })
    }

    fn set_text(&self, element_id: &str, text: &str) -> Result<(), DomError> {
        self.with_element(element_id, |element| element.text = text.to_string())
    }
}
