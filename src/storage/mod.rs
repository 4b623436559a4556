//! Credential storage for the session glue.
//!
//! This module provides:
//! - `TokenStore`: the key/value capability the glue is written against
//! - `MemoryStore`: in-process store for embedding and tests
//! - `FileStore`: JSON file store under a storage directory
//! - `KeyringStore`: OS keychain store
//!
//! The bearer credential lives under the fixed key [`TOKEN_KEY`].

pub mod file;
pub mod keyring;
pub mod memory;

pub use file::FileStore;
pub use keyring::KeyringStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// Storage key for the bearer credential
pub const TOKEN_KEY: &str = "token";

/// Key/value storage capability injected into the session glue.
///
/// `remove` of an absent key is a no-op; sign-out relies on that to stay
/// idempotent.
pub trait TokenStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`. Absent keys are left alone.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: TokenStore + ?Sized> TokenStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
