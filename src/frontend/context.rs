use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tokio::sync::watch;

use crate::api::{Backend, HttpBackend, RobotApi, SupportApi};
use crate::common::StartupError;
use crate::config::BackendConfig;
use crate::i18n::{Language, Translations, translations};
use crate::services::{
    BrowserStore, LanguageController, LocalStore, MemoryStore, SessionStore,
    Spawner,
};
use crate::types::{Identity, SessionState};

/// Detached tasks run on the Leptos executor.
pub struct LeptosSpawner;

impl Spawner for LeptosSpawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}

/// Composition root: the two state containers plus the record APIs the
/// pages call directly.
#[derive(Clone)]
pub struct Services {
    pub session: Rc<SessionStore>,
    pub language: Rc<LanguageController>,
    pub robots: Rc<dyn RobotApi>,
    pub support: Rc<dyn SupportApi>,
}

impl Services {
    pub fn new<B: Backend + 'static>(
        backend: Rc<B>,
        store: Rc<dyn LocalStore>,
        spawner: Rc<dyn Spawner>,
    ) -> Self {
        let session = Rc::new(SessionStore::new(backend.clone()));
        let language = Rc::new(LanguageController::new(
            store,
            backend.clone(),
            session.subscribe(),
            spawner,
        ));

        Self {
            session,
            language,
            robots: backend.clone(),
            support: backend,
        }
    }

    /// Wires the browser's local storage and the hosted backend together.
    pub fn connect() -> Result<Self, StartupError> {
        let config = BackendConfig::from_build_env()?;
        let store: Rc<dyn LocalStore> = match BrowserStore::open() {
            Ok(store) => Rc::new(store),
            Err(e) => {
                log::warn!("{}, falling back to in-memory storage", e);
                Rc::new(MemoryStore::new())
            }
        };
        let backend = Rc::new(HttpBackend::new(config, store.clone())?);

        Ok(Self::new(backend, store, Rc::new(LeptosSpawner)))
    }
}

/// Reactive view of the services, shared through Leptos context.
///
/// The signals mirror the watch channels owned by [`SessionStore`] and
/// [`LanguageController`]; those remain the only writers.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<SessionState>,
    pub language: RwSignal<Language>,
    services: StoredValue<Services, LocalStorage>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        let session = RwSignal::new(services.session.state());
        let language = RwSignal::new(services.language.language());
        mirror(services.session.subscribe(), session);
        mirror(services.language.subscribe(), language);

        Self {
            session,
            language,
            services: StoredValue::new_local(services),
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    /// Active string table; tracked.
    pub fn t(&self) -> &'static Translations {
        translations(self.language.get())
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.with(|state| state.identity.clone())
    }

    pub fn identity_untracked(&self) -> Option<Identity> {
        self.session.with_untracked(|state| state.identity.clone())
    }

    pub fn set_language(&self, language: Language) {
        self.services().language.set_language(language);
        self.language.set(language);
    }

    /// Pulls the session snapshot now instead of waiting for the mirror.
    pub fn sync_session(&self) {
        self.session.set(self.services().session.state());
    }

    /// The backend rejected the credential; drop the identity so the guards
    /// send the user to sign in.
    pub fn expire_session(&self) {
        self.services().session.expire();
        self.sync_session();
    }
}

fn mirror<T>(mut source: watch::Receiver<T>, target: RwSignal<T>)
where
    T: Clone + Send + Sync + 'static,
{
    spawn_local(async move {
        while source.changed().await.is_ok() {
            let value = source.borrow_and_update().clone();
            target.set(value);
        }
    });
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
