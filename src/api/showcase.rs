//! JavaScript entry points for the display routines

use wasm_bindgen::prelude::*;

use super::helpers::{config_from_js, js_error, serialize};
use crate::config::ShowcaseConfig;
use crate::dom::BrowserDom;
use crate::fetch::BrowserFetch;
use crate::parse::parse_pet_list;
use crate::renderers::RandomSelector;
use crate::showcase::{self, FreeSpaceDisplay, FreeSpaceOutcome, PetListRenderer};

/// Launch both routines with the default page layout
#[wasm_bindgen(js_name = startShowcase)]
pub fn start_showcase() {
    showcase::launch(ShowcaseConfig::default());
}

/// Launch both routines with a config object (missing keys use defaults)
#[wasm_bindgen(js_name = startShowcaseWithConfig)]
pub fn start_showcase_with_config(config: JsValue) -> Result<(), JsValue> {
    showcase::launch(config_from_js(config)?);
    Ok(())
}

/// Launch both routines with a YAML config
#[wasm_bindgen(js_name = startShowcaseFromYaml)]
pub fn start_showcase_from_yaml(yaml: &str) -> Result<(), JsValue> {
    let config = ShowcaseConfig::from_yaml(yaml).map_err(|e| {
        log::error!("Error: {}", e);
        js_error(e)
    })?;
    showcase::launch(config);
    Ok(())
}

/// Render the pet list into the page
///
/// # Returns
/// The render report: `{ total, rendered, skipped: [{ position, tag, reason }], empty }`
#[wasm_bindgen(js_name = displayPets)]
pub async fn display_pets(config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let dom = BrowserDom::from_window().map_err(js_error)?;

    let mut renderer = PetListRenderer::new(&config, RandomSelector);
    let report = renderer.run(&BrowserFetch, &dom).await.map_err(js_error)?;

    serialize(&report, "Failed to serialize render report")
}

/// Show the free-space count in the page
///
/// Resolves with the displayed text. On failure the error text is already
/// shown when the promise rejects.
#[wasm_bindgen(js_name = displayFreeSpace)]
pub async fn display_free_space(config: JsValue) -> Result<String, JsValue> {
    let config = config_from_js(config)?;
    let dom = BrowserDom::from_window().map_err(js_error)?;

    match FreeSpaceDisplay::new(&config).run(&BrowserFetch, &dom).await {
        FreeSpaceOutcome::Displayed(value) => Ok(value.into_inner()),
        FreeSpaceOutcome::Failed(err) => Err(js_error(err)),
    }
}

/// Card markup for a pet list document, without touching the page
///
/// # Returns
/// Array of HTML strings, one per valid record, in document order
#[wasm_bindgen(js_name = renderPetCards)]
pub fn render_pet_cards(xml: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let list = parse_pet_list(xml).map_err(js_error)?;

    let mut renderer = PetListRenderer::new(&config, RandomSelector);
    let cards = renderer.render_cards(&list).map_err(js_error)?;

    serialize(&cards, "Failed to serialize cards")
}
