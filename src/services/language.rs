use std::cell::Cell;
use std::rc::Rc;

use tokio::sync::watch;

use super::{LocalStore, Spawner};
use crate::api::ProfileApi;
use crate::detach;
use crate::i18n::{Language, Translations, translations};
use crate::types::{Identity, SessionState};

/// Local-store key for the last language the user picked.
pub const LANGUAGE_KEY: &str = "preferred_language";

/// Resolves the active language from the local cache and the signed-in
/// user's profile.
///
/// The local value is applied synchronously in [`LanguageController::new`];
/// the profile value can only override it during [`reconcile`], which waits
/// for the session to resolve first.
///
/// [`reconcile`]: LanguageController::reconcile
pub struct LanguageController {
    store: Rc<dyn LocalStore>,
    api: Rc<dyn ProfileApi>,
    session: watch::Receiver<SessionState>,
    spawner: Rc<dyn Spawner>,
    active: watch::Sender<Language>,
    reconciled: Cell<bool>,
    changes: Cell<u64>,
}

impl LanguageController {
    pub fn new(
        store: Rc<dyn LocalStore>,
        api: Rc<dyn ProfileApi>,
        session: watch::Receiver<SessionState>,
        spawner: Rc<dyn Spawner>,
    ) -> Self {
        let initial = read_local(store.as_ref());

        Self {
            store,
            api,
            session,
            spawner,
            active: watch::Sender::new(initial),
            reconciled: Cell::new(false),
            changes: Cell::new(0),
        }
    }

    pub fn language(&self) -> Language {
        *self.active.borrow()
    }

    pub fn strings(&self) -> &'static Translations {
        translations(self.language())
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.active.subscribe()
    }

    /// Applies `language` immediately and, for a signed-in user, pushes it
    /// to the profile in the background.
    pub fn set_language(&self, language: Language) {
        self.changes.set(self.changes.get() + 1);
        self.apply(language);

        let identity = self.session.borrow().identity.clone();
        if let Some(identity) = identity {
            let api = Rc::clone(&self.api);
            detach!(self.spawner, "profile language sync", async move {
                api.set_profile_language(identity.id, language).await
            });
        }
    }

    /// One-shot: once the session has resolved, let the profile's stored
    /// language override the local one.
    pub async fn reconcile(&self) {
        if self.reconciled.replace(true) {
            return;
        }

        let mut session = self.session.clone();
        let identity = match session.wait_for(SessionState::is_resolved).await {
            Ok(state) => state.identity.clone(),
            Err(_) => {
                log::warn!("Session store dropped before resolving");
                return;
            }
        };

        match identity {
            Some(identity) => self.adopt_profile_language(&identity).await,
            None => log::debug!("No session, keeping {}", self.language()),
        }
    }

    /// Reads `identity`'s profile language and applies it when valid.
    ///
    /// The result is dropped if the user picked a language or the identity
    /// changed while the read was in flight.
    pub async fn adopt_profile_language(&self, identity: &Identity) {
        let changes = self.changes.get();
        let stored = match self.api.profile_language(identity.id).await {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("Profile language read failed: {}", e);
                return;
            }
        };

        let Some(raw) = stored else {
            log::debug!("Profile has no language, keeping {}", self.language());
            return;
        };
        let language = match raw.parse::<Language>() {
            Ok(language) => language,
            Err(e) => {
                log::debug!("Ignoring profile language: {}", e);
                return;
            }
        };

        let same_identity = self
            .session
            .borrow()
            .identity
            .as_ref()
            .is_some_and(|current| current.id == identity.id);
        if !same_identity || self.changes.get() != changes {
            log::debug!("Discarding stale profile language {}", language);
            return;
        }

        self.apply(language);
    }

    fn apply(&self, language: Language) {
        self.active.send_replace(language);
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.as_str()) {
            log::warn!("Could not cache language: {}", e);
        }
    }
}

fn read_local(store: &dyn LocalStore) -> Language {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            log::debug!("Ignoring cached language: {}", e);
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            log::warn!("Could not read cached language: {}", e);
            Language::default()
        }
    }
}
