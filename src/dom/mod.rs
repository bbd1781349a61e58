//! DOM host abstraction
//!
//! The display routines only need three operations on the page. Keeping them
//! behind [`DomHost`] lets the routines run against the real document in the
//! browser and against [`MemoryDom`] in native tests.

pub mod browser;
pub mod memory;

pub use browser::BrowserDom;
pub use memory::MemoryDom;

use crate::errors::DomError;

/// The parts of the page the display routines write to
pub trait DomHost {
    /// Append markup as the last children of an element
    fn append_html(&self, element_id: &str, html: &str) -> Result<(), DomError>;

    /// Set the CSS `display` property of an element
    fn set_display(&self, element_id: &str, display: &str) -> Result<(), DomError>;

    /// Replace the text of an element
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), DomError>;
}

impl<D: DomHost + ?Sized> DomHost for &D {
    fn append_html(&self, element_id: &str, html: &str) -> Result<(), DomError> {
        (**self).append_html(element_id, html)
    }

    fn set_display(&self, element_id: &str, display: &str) -> Result<(), DomError> {
        (**self).set_display(element_id, display)
    }

    fn set_text(&self, element_id: &str, text: &str) -> Result<(), DomError> {
        (**self).set_text(element_id, text)
    }
}
