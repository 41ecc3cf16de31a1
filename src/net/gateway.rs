//! Authenticated request gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through here: relative paths are resolved against
//! the configured base address and the bearer token is read from the session
//! store at call time. The gateway owns the `Authorization` header; callers
//! never supply credentials themselves. It makes exactly one network attempt
//! per call, never caches, and never interprets status codes; response
//! handling lives with callers in `net::api`.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use crate::state::session::SessionStore;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::Serialize;

#[cfg(feature = "hydrate")]
use super::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::config;

/// Stateless per call; safe to copy into any number of concurrent fetches.
#[derive(Clone, Copy)]
pub struct Gateway {
    session: SessionStore,
}

impl Gateway {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

#[cfg(feature = "hydrate")]
impl Gateway {
    /// Issue a body-less request (GET/DELETE/PATCH without payload).
    pub async fn fetch(&self, method: Method, path_or_url: &str) -> Result<Response, ApiError> {
        let request = self
            .builder(method, path_or_url)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Issue a request with a JSON body.
    pub async fn submit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path_or_url: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .builder(method, path_or_url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    fn builder(&self, method: Method, path_or_url: &str) -> RequestBuilder {
        let url = resolve_url(config::api_base(), path_or_url);
        let builder = RequestBuilder::new(&url).method(method);
        match self.session.token() {
            Some(token) => builder.header("Authorization", &bearer_value(&token)),
            None => builder,
        }
    }
}

/// Resolve a caller path against the base address. Absolute URLs pass
/// through untouched; relative paths are joined with exactly one slash.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_url(base: &str, path_or_url: &str) -> String {
    if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
        return path_or_url.to_owned();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path_or_url.trim_start_matches('/')
    )
}

/// `Authorization` header value for a credential token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}
