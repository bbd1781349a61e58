//! Static resource retrieval
//!
//! [`DataSource`] is the one capability the display routines need from the
//! network. [`BrowserFetch`] uses `window.fetch`; [`StaticSource`] serves
//! canned payloads for tests and prerendering.

pub mod browser;
pub mod fixture;

pub use browser::BrowserFetch;
pub use fixture::StaticSource;

use crate::errors::FetchError;

/// Something that can fetch a resource body as text
///
/// Futures are polled on the page's single-threaded event loop, so they are
/// not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch_text(url).await
    }
}
