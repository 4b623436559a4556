use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::api::ApiError;
use crate::storage::{TokenStore, TOKEN_KEY};

/// Relative location the user is sent to after sign-out.
pub const SIGN_IN_PAGE: &str = "index.html";

/// Destination seam for post-sign-out navigation. The embedding shell
/// decides what navigating to a relative location means for its surface.
pub trait Navigator {
    fn navigate(&self, location: &str) -> Result<()>;
}

impl<F> Navigator for F
where
    F: Fn(&str) -> Result<()>,
{
    fn navigate(&self, location: &str) -> Result<()> {
        self(location)
    }
}

/// Session glue over an injected credential store and navigator.
///
/// Holds no credential state of its own: the token is read from the store
/// when asked for and never cached.
pub struct Session<S, N> {
    store: S,
    navigator: N,
}

impl<S: TokenStore, N: Navigator> Session<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// The injected store, for callers that also write the credential.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current credential, read from the store.
    pub fn token(&self) -> Result<Option<String>> {
        self.store.get(TOKEN_KEY)
    }

    /// Remove the stored credential and navigate to the sign-in page.
    ///
    /// Removing an already-absent credential is a no-op; navigation always
    /// occurs.
    pub fn sign_out(&self) -> Result<()> {
        self.store
            .remove(TOKEN_KEY)
            .context("Failed to remove stored credential")?;
        info!(location = SIGN_IN_PAGE, "Signed out");
        self.navigator
            .navigate(SIGN_IN_PAGE)
            .context("Failed to navigate to sign-in page")
    }

    /// React to a response status: 401 triggers sign-out, anything else is
    /// left alone. Returns whether sign-out ran.
    ///
    /// Not wired into the client automatically; callers invoke it per
    /// response.
    pub fn check_auth(&self, status: StatusCode) -> Result<bool> {
        if status == StatusCode::UNAUTHORIZED {
            warn!("Unauthorized response, signing out");
            self.sign_out()?;
            Ok(true)
        } else {
            debug!(status = status.as_u16(), "Response passed auth check");
            Ok(false)
        }
    }

    /// `check_auth` for errors surfaced by the client; reacts only to
    /// `ApiError::Unauthorized`.
    pub fn check_auth_error(&self, error: &anyhow::Error) -> Result<bool> {
        match error.downcast_ref::<ApiError>() {
            Some(api_err) if api_err.is_unauthorized() => {
                warn!("Unauthorized response, signing out");
                self.sign_out()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::{Arc, Mutex};

    fn recording_session() -> (
        Session<Arc<MemoryStore>, impl Navigator>,
        Arc<MemoryStore>,
        Arc<Mutex<Vec<String>>>,
    ) {
        let store = Arc::new(MemoryStore::new());
        let visited = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&visited);
        let navigator = move |location: &str| -> Result<()> {
            recorder.lock().unwrap().push(location.to_string());
            Ok(())
        };
        (
            Session::new(Arc::clone(&store), navigator),
            store,
            visited,
        )
    }

    #[test]
    fn test_sign_out_removes_credential_and_navigates() {
        let (session, store, visited) = recording_session();
        store.set(TOKEN_KEY, "abc").unwrap();

        session.sign_out().unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(visited.lock().unwrap().as_slice(), [SIGN_IN_PAGE]);
    }

    #[test]
    fn test_sign_out_without_credential_still_navigates() {
        let (session, store, visited) = recording_session();

        session.sign_out().unwrap();
        session.sign_out().unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(visited.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_check_auth_reacts_only_to_401() {
        let (session, store, visited) = recording_session();
        store.set(TOKEN_KEY, "abc").unwrap();

        for status in [
            StatusCode::OK,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(!session.check_auth(status).unwrap());
        }
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert!(visited.lock().unwrap().is_empty());

        assert!(session.check_auth(StatusCode::UNAUTHORIZED).unwrap());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(visited.lock().unwrap().as_slice(), [SIGN_IN_PAGE]);
    }

    #[test]
    fn test_check_auth_error_matches_unauthorized_only() {
        let (session, store, visited) = recording_session();
        store.set(TOKEN_KEY, "abc").unwrap();

        let not_found = anyhow::Error::new(ApiError::NotFound("missing".into()));
        assert!(!session.check_auth_error(&not_found).unwrap());
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        let unauthorized = anyhow::Error::new(ApiError::Unauthorized);
        assert!(session.check_auth_error(&unauthorized).unwrap());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(visited.lock().unwrap().as_slice(), [SIGN_IN_PAGE]);
    }

    #[test]
    fn test_token_reads_through_to_store() {
        let (session, store, _visited) = recording_session();
        assert_eq!(session.token().unwrap(), None);

        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(session.token().unwrap().as_deref(), Some("abc"));
    }
}
