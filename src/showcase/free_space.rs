//! Kennel free-space counter
//!
//! Fetches the free-space file and writes its text into the counter element.
//! On any failure the element shows a fixed error string instead.

use crate::config::ShowcaseConfig;
use crate::dom::DomHost;
use crate::errors::ShowcaseError;
use crate::fetch::DataSource;
use crate::models::FreeSpaceValue;

/// Result of one free-space run
#[derive(Debug)]
pub enum FreeSpaceOutcome {
    /// The value now shown on the page
    Displayed(FreeSpaceValue),

    /// The error text is shown; this is why
    Failed(ShowcaseError),
}

impl FreeSpaceOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, FreeSpaceOutcome::Displayed(_))
    }
}

pub struct FreeSpaceDisplay {
    url: String,
    element_id: String,
    error_text: String,
}

impl FreeSpaceDisplay {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            url: config.free_space_url.clone(),
            element_id: config.free_space_id.clone(),
            error_text: config.free_space_error_text.clone(),
        }
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    /// Fetch the count and show it, or show the error text
    pub async fn run<D, H>(&self, source: &D, dom: &H) -> FreeSpaceOutcome
    where
        D: DataSource,
        H: DomHost + ?Sized,
    {
        match source.fetch_text(&self.url).await {
            Ok(payload) => self.show(&payload, dom),
            Err(err) => self.fail(err.into(), dom),
        }
    }

    /// Show an already fetched payload
    pub fn show<H: DomHost + ?Sized>(&self, payload: &str, dom: &H) -> FreeSpaceOutcome {
        let value = FreeSpaceValue::from_payload(payload);
        match dom.set_text(&self.element_id, value.as_str()) {
            Ok(()) => {
                log::info!("Free spaces today: {}", value);
                FreeSpaceOutcome::Displayed(value)
            }
            Err(err) => self.fail(err.into(), dom),
        }
    }

    fn fail<H: DomHost + ?Sized>(&self, err: ShowcaseError, dom: &H) -> FreeSpaceOutcome {
        log::error!("Error: {}", err);
        if let Err(dom_err) = dom.set_text(&self.element_id, &self.error_text) {
            log::error!("Could not show free-space error text: {}", dom_err);
        }
        FreeSpaceOutcome::Failed(err)
    }
}
