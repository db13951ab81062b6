use std::cell::Cell;
use std::rc::Rc;

use tokio::sync::watch;

use crate::api::AuthApi;
use crate::common::AuthError;
use crate::types::{Identity, SessionState};

/// Owns "who is logged in" for the lifetime of the page.
///
/// Every identity transition goes through one `send_modify`, so subscribers
/// only ever observe complete states.
pub struct SessionStore {
    api: Rc<dyn AuthApi>,
    state: watch::Sender<SessionState>,
    started: Cell<bool>,
    // Bumped on every identity change; lets a slow `initialize` see that it
    // has been overtaken.
    epoch: Cell<u64>,
}

impl SessionStore {
    pub fn new(api: Rc<dyn AuthApi>) -> Self {
        Self {
            api,
            state: watch::Sender::new(SessionState::initializing()),
            started: Cell::new(false),
            epoch: Cell::new(0),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Asks the backend for an existing session. Runs at most once; any
    /// failure resolves to "signed out".
    pub async fn initialize(&self) {
        if self.started.replace(true) {
            log::debug!("Session already initialized, ignoring");
            return;
        }

        let epoch = self.epoch.get();
        let identity = match self.api.current_identity().await {
            Ok(identity) => identity,
            Err(e) => {
                log::warn!("Session lookup failed, continuing signed out: {}", e);
                None
            }
        };

        self.state.send_modify(|state| {
            if self.epoch.get() == epoch {
                state.identity = identity;
            }
            state.initializing = false;
        });
        log::debug!("Session resolved: {:?}", self.state.borrow().identity);
    }

    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let identity = self.api.sign_in(email, password).await?;
        self.set_identity(Some(identity.clone()));

        Ok(identity)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let identity = self.api.sign_up(email, password).await?;
        self.set_identity(Some(identity.clone()));

        Ok(identity)
    }

    /// Ends the session. The local identity is cleared even when the backend
    /// call fails.
    pub async fn sign_out(&self) {
        if let Err(e) = self.api.sign_out().await {
            log::warn!("Backend sign-out failed: {}", e);
        }
        self.set_identity(None);
    }

    /// Drops the identity after the backend rejected its credential.
    pub fn expire(&self) {
        if self.state.borrow().identity.is_some() {
            log::info!("Session expired");
            self.set_identity(None);
        }
    }

    fn set_identity(&self, identity: Option<Identity>) {
        self.epoch.set(self.epoch.get() + 1);
        self.state.send_modify(|state| state.identity = identity);
    }
}
