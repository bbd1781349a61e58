//! `DataSource` backed by `window.fetch`

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::DataSource;
use crate::errors::FetchError;
use crate::utils::describe_js_value;

/// Fetches resources relative to the current page
///
/// Non-2xx responses are failures; the body of an error page is never shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFetch;

impl DataSource for BrowserFetch {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or_else(|| network(url, "no browser window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| network(url, describe_js_value(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| network(url, "fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let text = response.text().map_err(|e| body(url, describe_js_value(&e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| body(url, describe_js_value(&e)))?
            .as_string()
            .ok_or_else(|| body(url, "response body is not text".to_string()))?;

        log::debug!("Fetched {} ({} bytes)", url, text.len());
        Ok(text)
    }
}

fn network(url: &str, message: String) -> FetchError {
    FetchError::Network {
        url: url.to_string(),
        message,
    }
}

fn body(url: &str, message: String) -> FetchError {
    FetchError::Body {
        url: url.to_string(),
        message,
    }
}
