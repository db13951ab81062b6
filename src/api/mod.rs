//! Contract with the hosted authentication and record service.
//!
//! The session store, language controller and pages only see these traits;
//! [`HttpBackend`] is the production implementation.

mod http;

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::{AuthError, BackendError};
use crate::i18n::Language;
use crate::models::{Robot, RobotCreate, SupportTicket};
use crate::types::Identity;

pub use http::{CREDENTIALS_KEY, HttpBackend, classify_auth_error};

#[async_trait(?Send)]
pub trait AuthApi {
    /// Identity behind a previously issued credential, if any.
    async fn current_identity(&self)
    -> Result<Option<Identity>, BackendError>;

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError>;

    /// Creates the account and signs it in. Fails with
    /// `AuthError::ConfirmationPending` when no session is issued yet.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError>;

    async fn sign_out(&self) -> Result<(), BackendError>;
}

#[async_trait(?Send)]
pub trait ProfileApi {
    /// Raw `preferred_language` column; callers validate it.
    async fn profile_language(
        &self,
        user_id: Uuid,
    ) -> Result<Option<String>, BackendError>;

    async fn set_profile_language(
        &self,
        user_id: Uuid,
        language: Language,
    ) -> Result<(), BackendError>;
}

#[async_trait(?Send)]
pub trait RobotApi {
    /// Robots owned by `user_id`, newest first.
    async fn list_robots(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Robot>, BackendError>;

    async fn create_robot(
        &self,
        data: &RobotCreate,
    ) -> Result<Robot, BackendError>;

    async fn delete_robot(&self, id: Uuid) -> Result<(), BackendError>;
}

#[async_trait(?Send)]
pub trait SupportApi {
    async fn submit_ticket(
        &self,
        ticket: &SupportTicket,
    ) -> Result<(), BackendError>;
}

/// Everything the pages need from the backend.
pub trait Backend: AuthApi + ProfileApi + RobotApi + SupportApi {}

impl<T> Backend for T where T: AuthApi + ProfileApi + RobotApi + SupportApi {}
