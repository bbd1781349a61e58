//! Adoption card rendering
//!
//! Cards come from a Mustache template filled from a typed [`CardContext`].
//! Every `{{field}}` is HTML-escaped by the template engine, so text from the
//! pet list can never inject markup into the page.

use serde::Serialize;

use crate::errors::RenderError;
use crate::models::AnimalRecord;

/// Template source for one card
pub const CARD_TEMPLATE: &str = include_str!("templates/card.html.mustache");

/// Page-level options that apply to every card
#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    /// Directory the image assets are served from, relative to the page
    pub image_dir: String,

    /// Suffix written straight after the price
    pub currency: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            image_dir: "img".to_string(),
            currency: "dkk".to_string(),
        }
    }
}

/// Context data for one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardContext<'a> {
    pub image_src: String,
    pub species: &'a str,
    pub name: &'a str,
    pub age: &'a str,
    pub color: &'a str,
    pub gender: &'a str,
    pub price: &'a str,
    pub currency: &'a str,
}

impl<'a> CardContext<'a> {
    pub fn new(record: &'a AnimalRecord, image: &str, options: &'a CardOptions) -> Self {
        Self {
            image_src: image_path(&options.image_dir, image),
            species: &record.species,
            name: &record.name,
            age: &record.age,
            color: &record.color,
            gender: &record.gender,
            price: &record.price,
            currency: &options.currency,
        }
    }
}

/// Join the asset directory and file name
pub fn image_path(image_dir: &str, image: &str) -> String {
    let dir = image_dir.trim_end_matches('/');
    if dir.is_empty() {
        image.to_string()
    } else {
        format!("{}/{}", dir, image)
    }
}

/// Compiled card template, reused for every card of a render run
pub struct CardTemplate {
    template: mustache::Template,
}

impl CardTemplate {
    pub fn compile() -> Result<Self, RenderError> {
        Self::from_source(CARD_TEMPLATE)
    }

    pub fn from_source(source: &str) -> Result<Self, RenderError> {
        let template =
            mustache::compile_str(source).map_err(|e| RenderError::Compile(e.to_string()))?;
        Ok(Self { template })
    }

    /// Render the markup for one card
    pub fn render(&self, context: &CardContext) -> Result<String, RenderError> {
        Ok(self.template.render_to_string(context)?)
    }

    /// Render a record with an already chosen image
    pub fn render_record(
        &self,
        record: &AnimalRecord,
        image: &str,
        options: &CardOptions,
    ) -> Result<String, RenderError> {
        self.render(&CardContext::new(record, image, options))
    }
}
