//! Immutable request configuration.
//!
//! The configuration is constructed once from the credential value current
//! at build time and passed explicitly to the client, rather than mutated
//! as shared global state.

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::storage::{TokenStore, TOKEN_KEY};

/// Rendered into the authorization header when no credential is stored.
/// The panel has always sent the literal string in that case; the server
/// rejects it like any other unknown token.
const MISSING_TOKEN: &str = "null";

/// Header set attached to every request issued through a `PanelClient`:
/// a JSON content-type marker and a bearer authorization header.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    headers: HeaderMap,
}

impl RequestConfig {
    /// Build the configuration from the credential currently in the store.
    ///
    /// The token is read exactly once; rebuilding the configuration is the
    /// only way to pick up a changed credential.
    pub fn from_store(store: &dyn TokenStore) -> Result<Self> {
        let token = store.get(TOKEN_KEY)?;
        debug!(authorized = token.is_some(), "Building request configuration");
        Self::with_token(token.as_deref())
    }

    /// Build the configuration from an explicit token value.
    ///
    /// `None` renders as `Authorization: Bearer null`.
    pub fn with_token(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token.unwrap_or(MISSING_TOKEN)))?,
        );
        Ok(Self { headers })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
