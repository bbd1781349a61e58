//! `DomHost` backed by the browser document (web-sys)

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::DomHost;
use crate::errors::DomError;
use crate::utils::describe_js_value;

/// The page the module was loaded into
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// Use the document of the current window
    pub fn from_window() -> Result<Self, DomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(DomError::NoDocument)?;
        Ok(Self { document })
    }

    fn element(&self, element_id: &str) -> Result<Element, DomError> {
        self.document
            .get_element_by_id(element_id)
            .ok_or_else(|| DomError::MissingElement(element_id.to_string()))
    }

    fn html_element(&self, element_id: &str) -> Result<HtmlElement, DomError> {
        self.element(element_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::Js(format!("#{} is not an HTML element", element_id)))
    }
}

impl DomHost for BrowserDom {
    /// Uses `insertAdjacentHTML("beforeend")` so cards already in the
    /// container are not re-parsed.
    fn append_html(&self, element_id: &str, html: &str) -> Result<(), DomError> {
        self.element(element_id)?
            .insert_adjacent_html("beforeend", html)
            .map_err(|e| DomError::Js(describe_js_value(&e)))
    }

    fn set_display(&self, element_id: &str, display: &str) -> Result<(), DomError> {
        self.html_element(element_id)?
            .style()
            .set_property("display", display)
            .map_err(|e| DomError::Js(describe_js_value(&e)))
    }

    fn set_text(&self, element_id: &str, text: &str) -> Result<(), DomError> {
        let element = self.element(element_id)?;
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.set_inner_text(text),
            None => element.set_text_content(Some(text)),
        }
        Ok(())
    }
}
