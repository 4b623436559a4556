//! Session glue for the admin panel.
//!
//! This library sits between a stored bearer credential, outgoing HTTP
//! requests, and the sign-out affordance:
//!
//! - [`storage`]: injected key/value credential store with in-memory,
//!   JSON-file, and OS-keychain backends
//! - [`api`]: immutable request configuration built from the current
//!   credential, and a client that carries it on every request
//! - [`auth`]: sign-out, unauthorized-response handling, and sign-out
//!   control binding
//! - [`utils`]: loose boolean parsing
//!
//! The library never issues, validates, or rotates credentials; it reads a
//! previously stored token and reacts to a single HTTP status code (401).
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use panel_session::{
//!     Config, FileStore, PanelClient, RequestConfig, Session, SignOutControl,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let store = Arc::new(FileStore::default_location("panel-session")?);
//!
//! let request_config = RequestConfig::from_store(&*store)?;
//! let client = PanelClient::with_timeout(
//!     config.base_url.clone(),
//!     &request_config,
//!     config.timeout(),
//! )?;
//!
//! let session = Arc::new(Session::new(
//!     Arc::clone(&store),
//!     |location: &str| -> anyhow::Result<()> {
//!         println!("navigate to {location}");
//!         Ok(())
//!     },
//! ));
//! let sign_out = SignOutControl::bind(move || session.sign_out());
//! # let _ = (client, sign_out);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod storage;
pub mod utils;

pub use api::{ApiError, PanelClient, RequestConfig};
pub use auth::{Navigator, Session, SignOutControl, SIGN_IN_PAGE};
pub use config::Config;
pub use storage::{FileStore, KeyringStore, MemoryStore, TokenStore, TOKEN_KEY};
pub use utils::parse_bool;
