//! Page configuration
//!
//! Every key has a default matching the VIA Pets website layout, so an empty
//! object (or empty YAML document) is a valid configuration. Keys are
//! camelCase in both JS objects and YAML.

use serde::{Deserialize, Serialize};

use crate::errors::ShowcaseError;
use crate::renderers::CardOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseConfig {
    /// Pet list XML, relative to the page
    pub pets_url: String,

    /// Free-space text file, relative to the page
    pub free_space_url: String,

    /// Element the cards are appended to
    pub pets_container_id: String,

    /// Hidden notice revealed when the pet list is empty
    pub no_pets_message_id: String,

    /// CSS `display` value that reveals the notice
    pub no_pets_display: String,

    /// Element receiving the free-space count
    pub free_space_id: String,

    /// Shown in place of the count when it cannot be loaded
    pub free_space_error_text: String,

    /// Directory holding the card images
    pub image_dir: String,

    /// Suffix written after every price
    pub currency: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            pets_url: "../savedInformation/petsForWebsite.xml".to_string(),
            free_space_url: "../savedInformation/getFreeSpace.txt".to_string(),
            pets_container_id: "pets".to_string(),
            no_pets_message_id: "noPetsMessage".to_string(),
            no_pets_display: "flex".to_string(),
            free_space_id: "freeSpaces".to_string(),
            free_space_error_text: "An error has occurred".to_string(),
            image_dir: "img".to_string(),
            currency: "dkk".to_string(),
        }
    }
}

impl ShowcaseConfig {
    /// Parse a YAML configuration and validate it
    pub fn from_yaml(text: &str) -> Result<Self, ShowcaseError> {
        let config: ShowcaseConfig = if text.trim().is_empty() {
            ShowcaseConfig::default()
        } else {
            serde_yaml::from_str(text).map_err(|e| ShowcaseError::Config(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations whose URLs or element ids are blank
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        let required = [
            ("petsUrl", &self.pets_url),
            ("freeSpaceUrl", &self.free_space_url),
            ("petsContainerId", &self.pets_container_id),
            ("noPetsMessageId", &self.no_pets_message_id),
            ("freeSpaceId", &self.free_space_id),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ShowcaseError::Config(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }

    pub fn card_options(&self) -> CardOptions {
        CardOptions {
            image_dir: self.image_dir.clone(),
            currency: self.currency.clone(),
        }
    }
}
