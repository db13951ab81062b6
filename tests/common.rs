#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use tokio::sync::oneshot;
use uuid::Uuid;

use robottrader::api::{AuthApi, ProfileApi, RobotApi, SupportApi};
use robottrader::common::{AuthError, BackendError};
use robottrader::i18n::Language;
use robottrader::models::*;
use robottrader::services::{
    LANGUAGE_KEY, LanguageController, LocalStore, MemoryStore, SessionStore,
    Spawner,
};
use robottrader::types::{Identity, SessionState};

pub fn get_seed_identity_0() -> Identity {
    Identity {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000000").unwrap(),
        email: "user0@test.com".to_string(),
    }
}

pub fn get_seed_identity_1() -> Identity {
    Identity {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "user1@test.com".to_string(),
    }
}

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn server_error() -> BackendError {
    BackendError::Status {
        status: 500,
        message: "simulated failure".to_string(),
    }
}

/// Backend double with scripted outcomes. Every call is recorded by name.
#[derive(Default)]
pub struct FakeBackend {
    /// Session the backend considers active.
    pub session: RefCell<Option<Identity>>,
    pub lookup_fails: Cell<bool>,
    /// When set, `current_identity` waits for the sender before answering.
    pub lookup_gate: RefCell<Option<oneshot::Receiver<()>>>,
    /// email -> (password, identity)
    pub accounts: RefCell<HashMap<String, (String, Identity)>>,
    pub unconfirmed: RefCell<Vec<String>>,
    /// Sign-up creates the account but issues no session.
    pub confirmation_required: Cell<bool>,
    pub sign_in_fails: Cell<bool>,
    pub sign_out_fails: Cell<bool>,
    pub profile_languages: RefCell<HashMap<Uuid, String>>,
    pub profile_read_fails: Cell<bool>,
    /// When set, `profile_language` waits for the sender before answering.
    pub profile_gate: RefCell<Option<oneshot::Receiver<()>>>,
    pub profile_write_fails: Cell<bool>,
    pub robots: RefCell<Vec<Robot>>,
    pub tickets: RefCell<Vec<SupportTicket>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, identity: &Identity, password: &str) -> Self {
        self.accounts.borrow_mut().insert(
            identity.email.clone(),
            (password.to_string(), identity.clone()),
        );
        self
    }

    pub fn with_session(self, identity: &Identity) -> Self {
        *self.session.borrow_mut() = Some(identity.clone());
        self
    }

    pub fn with_profile_language(self, id: Uuid, language: &str) -> Self {
        self.profile_languages
            .borrow_mut()
            .insert(id, language.to_string());
        self
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn current_identity(
        &self,
    ) -> Result<Option<Identity>, BackendError> {
        self.record("current_identity");
        let answer = self.session.borrow().clone();
        let fails = self.lookup_fails.get();

        let gate = self.lookup_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if fails {
            return Err(server_error());
        }
        Ok(answer)
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        self.record(format!("sign_in:{}", email));
        if self.sign_in_fails.get() {
            return Err(AuthError::Backend(server_error()));
        }
        if self.unconfirmed.borrow().iter().any(|e| e == email) {
            return Err(AuthError::EmailUnconfirmed);
        }

        let identity = match self.accounts.borrow().get(email) {
            Some((stored, identity)) if stored == password => identity.clone(),
            _ => return Err(AuthError::InvalidCredentials),
        };
        *self.session.borrow_mut() = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        self.record(format!("sign_up:{}", email));
        if self.accounts.borrow().contains_key(email) {
            return Err(AuthError::AlreadyRegistered);
        }

        let identity = Identity {
            id: Uuid::new_v4(),
            email: email.to_string(),
        };
        self.accounts.borrow_mut().insert(
            email.to_string(),
            (password.to_string(), identity.clone()),
        );
        if self.confirmation_required.get() {
            self.unconfirmed.borrow_mut().push(email.to_string());
            return Err(AuthError::ConfirmationPending);
        }
        *self.session.borrow_mut() = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.record("sign_out");
        if self.sign_out_fails.get() {
            return Err(server_error());
        }
        *self.session.borrow_mut() = None;
        Ok(())
    }
}

#[async_trait(?Send)]
impl ProfileApi for FakeBackend {
    async fn profile_language(
        &self,
        user_id: Uuid,
    ) -> Result<Option<String>, BackendError> {
        self.record("profile_language");
        let gate = self.profile_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.profile_read_fails.get() {
            return Err(server_error());
        }
        Ok(self.profile_languages.borrow().get(&user_id).cloned())
    }

    async fn set_profile_language(
        &self,
        user_id: Uuid,
        language: Language,
    ) -> Result<(), BackendError> {
        self.record(format!("set_profile_language:{}", language));
        if self.profile_write_fails.get() {
            return Err(server_error());
        }
        self.profile_languages
            .borrow_mut()
            .insert(user_id, language.as_str().to_string());
        Ok(())
    }
}

#[async_trait(?Send)]
impl RobotApi for FakeBackend {
    async fn list_robots(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Robot>, BackendError> {
        self.record("list_robots");
        let mut robots: Vec<Robot> = self
            .robots
            .borrow()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        robots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(robots)
    }

    async fn create_robot(
        &self,
        data: &RobotCreate,
    ) -> Result<Robot, BackendError> {
        self.record("create_robot");
        let robot = Robot {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            name: data.name.clone(),
            platform: data.platform,
            strategy: data.strategy,
            created_at: Utc::now(),
        };
        self.robots.borrow_mut().push(robot.clone());
        Ok(robot)
    }

    async fn delete_robot(&self, id: Uuid) -> Result<(), BackendError> {
        self.record("delete_robot");
        self.robots.borrow_mut().retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl SupportApi for FakeBackend {
    async fn submit_ticket(
        &self,
        ticket: &SupportTicket,
    ) -> Result<(), BackendError> {
        self.record("submit_ticket");
        self.tickets.borrow_mut().push(ticket.clone());
        Ok(())
    }
}

/// Holds detached tasks until the test runs them.
#[derive(Default)]
pub struct QueuedSpawner {
    tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl QueuedSpawner {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub async fn run_all(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        for task in tasks {
            task.await;
        }
    }
}

impl Spawner for QueuedSpawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }
}

/// Session store and language controller wired to one fake backend.
pub struct Harness {
    pub backend: Rc<FakeBackend>,
    pub store: Rc<MemoryStore>,
    pub spawner: Rc<QueuedSpawner>,
    pub session: Rc<SessionStore>,
    pub language: LanguageController,
}

impl Harness {
    pub fn new(backend: FakeBackend, store: MemoryStore) -> Self {
        let backend = Rc::new(backend);
        let store = Rc::new(store);
        let spawner = Rc::new(QueuedSpawner::default());
        let session = Rc::new(SessionStore::new(backend.clone()));
        let language = LanguageController::new(
            store.clone(),
            backend.clone(),
            session.subscribe(),
            spawner.clone(),
        );

        Self {
            backend,
            store,
            spawner,
            session,
            language,
        }
    }

    pub fn cached_language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY).unwrap()
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }
}

pub fn store_with_language(language: &str) -> MemoryStore {
    MemoryStore::with_entry(LANGUAGE_KEY, language)
}
