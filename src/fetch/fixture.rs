//! `DataSource` serving canned payloads

use std::cell::RefCell;
use std::collections::HashMap;

use super::DataSource;
use crate::errors::FetchError;

/// Maps URLs to fixed responses and records every request
///
/// Unknown URLs answer like a static server would: HTTP 404.
#[derive(Debug, Default)]
pub struct StaticSource {
    responses: HashMap<String, Result<String, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    pub fn with_text(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    /// Fail requests for `url` with `error`
    pub fn with_error(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl DataSource for StaticSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        match self.responses.get(url) {
            Some(response) => response.clone(),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
