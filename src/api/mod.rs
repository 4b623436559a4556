//! HTTP plumbing for the admin panel API.
//!
//! This module provides the immutable `RequestConfig` built from the
//! current credential, the `PanelClient` that carries it on every request,
//! and the `ApiError` taxonomy for non-success responses.

pub mod client;
pub mod config;
pub mod error;

pub use client::PanelClient;
pub use config::RequestConfig;
pub use error::ApiError;
