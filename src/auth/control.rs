use anyhow::Result;

/// Sign-out affordance binding.
///
/// `bind` registers what activation does; `activate` is called by whatever
/// surface hosts the control (button, key handler, menu item). The control
/// knows nothing about how it is wired.
pub struct SignOutControl {
    handler: Box<dyn Fn() -> Result<()> + Send + Sync>,
}

impl SignOutControl {
    /// Register the handler invoked on activation.
    pub fn bind<F>(handler: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Invoke the bound handler.
    pub fn activate(&self) -> Result<()> {
        (self.handler)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::storage::{MemoryStore, TokenStore, TOKEN_KEY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_activate_invokes_bound_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let control = SignOutControl::bind(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        control.activate().unwrap();
        control.activate().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_control_wired_to_session_sign_out() {
        let store = Arc::new(MemoryStore::new());
        store.set(TOKEN_KEY, "abc").unwrap();

        let session = Arc::new(Session::new(
            Arc::clone(&store),
            |_location: &str| -> Result<()> { Ok(()) },
        ));
        let control = SignOutControl::bind(move || session.sign_out());

        control.activate().unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }
}
