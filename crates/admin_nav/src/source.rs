//! Where the menu definition comes from.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::NavError;

/// A response as seen by the renderer: status line plus the full body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// A `200 OK` response with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    /// An empty response with the given status line.
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches documents by URL.
///
/// This is the one suspension point of the renderer. Implementations only
/// report transport failures as errors; status handling is left to the
/// caller.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ConfigSource {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, NavError>;
}

/// In-memory [`ConfigSource`] answering from a fixed table.
///
/// URLs without an entry answer `404 Not Found`.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    entries: HashMap<String, Result<HttpResponse, String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `response` for `url`.
    pub fn with_response(mut self, url: impl Into<String>, response: HttpResponse) -> Self {
        self.entries.insert(url.into(), Ok(response));
        self
    }

    /// Serves `body` with status 200 for `url`.
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_response(url, HttpResponse::ok(body))
    }

    /// Fails requests for `url` as if the network were unreachable.
    pub fn with_transport_error(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries.insert(url.into(), Err(message.into()));
        self
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ConfigSource for StaticSource {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, NavError> {
        match self.entries.get(url) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(NavError::Transport {
                url: url.to_string(),
                message: message.clone(),
            }),
            None => Ok(HttpResponse::status(404, "Not Found")),
        }
    }
}
