//! Page display routines
//!
//! The two routines are independent: each issues its own fetch and writes to
//! its own elements, so they are spawned separately and finish in any order.

pub mod free_space;
pub mod pet_list;

pub use free_space::{FreeSpaceDisplay, FreeSpaceOutcome};
pub use pet_list::{PetListRenderer, RenderReport, SkippedRecord};

use wasm_bindgen_futures::spawn_local;

use crate::config::ShowcaseConfig;
use crate::dom::BrowserDom;
use crate::fetch::BrowserFetch;
use crate::renderers::RandomSelector;

/// Start both routines on the page's event loop
pub fn launch(config: ShowcaseConfig) {
    log::info!(
        "Loading pets from {} and free spaces from {}",
        config.pets_url,
        config.free_space_url
    );

    let mut renderer = PetListRenderer::new(&config, RandomSelector);
    spawn_local(async move {
        match BrowserDom::from_window() {
            Ok(dom) => {
                // Failures are already logged by the renderer
                let _ = renderer.run(&BrowserFetch, &dom).await;
            }
            Err(err) => log::error!("Error: {}", err),
        }
    });

    let display = FreeSpaceDisplay::new(&config);
    spawn_local(async move {
        match BrowserDom::from_window() {
            Ok(dom) => {
                display.run(&BrowserFetch, &dom).await;
            }
            Err(err) => log::error!("Error: {}", err),
        }
    });
}
