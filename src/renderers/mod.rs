//! Renderers module for the showcase
//!
//! Turns parsed animal records into card markup. Nothing here touches the
//! DOM; see `crate::dom` for that.

pub mod card;
pub mod images;

// Re-export commonly used types
pub use card::{CardContext, CardOptions, CardTemplate};
pub use images::{image_choices, image_for, FixedSelector, ImageSelector, RandomSelector, ScriptedSelector};
