use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{AuthApi, ProfileApi, RobotApi, SupportApi};
use crate::common::{AuthError, BackendError};
use crate::config::BackendConfig;
use crate::i18n::Language;
use crate::models::{Robot, RobotCreate, SupportTicket};
use crate::services::LocalStore;
use crate::types::{Credentials, Identity};

/// Local-store key holding the serialized [`Credentials`].
pub const CREDENTIALS_KEY: &str = "robottrader.auth";

#[derive(Deserialize)]
struct UserResponse {
    id: Uuid,
    email: Option<String>,
}

impl From<UserResponse> for Identity {
    fn from(user: UserResponse) -> Self {
        Identity {
            id: user.id,
            email: user.email.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    user: UserResponse,
}

/// Sign-up answers with a full session when confirmation is disabled, and
/// with the bare user object otherwise. Only the former signs the user in.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(UserResponse),
}

#[derive(Deserialize)]
struct ProfileRow {
    preferred_language: Option<String>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    error: Option<String>,
    error_code: Option<String>,
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

/// Maps a rejected auth request onto the outcomes the auth page reports.
pub fn classify_auth_error(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let code = parsed
        .error_code
        .or(parsed.error)
        .unwrap_or_default()
        .to_lowercase();
    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .unwrap_or_else(|| body.to_string());
    let lowered = message.to_lowercase();

    if code == "email_not_confirmed" || lowered.contains("email not confirmed")
    {
        AuthError::EmailUnconfirmed
    } else if code == "invalid_credentials"
        || code == "invalid_grant"
        || lowered.contains("invalid login credentials")
    {
        AuthError::InvalidCredentials
    } else if code == "user_already_exists"
        || code == "email_exists"
        || lowered.contains("already registered")
    {
        AuthError::AlreadyRegistered
    } else {
        AuthError::Backend(BackendError::Status { status, message })
    }
}

/// Talks to the hosted auth (`/auth/v1`) and REST (`/rest/v1`) endpoints.
///
/// The credential pair is cached in memory and mirrored to the local store
/// so a reload can restore the session.
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
    store: Rc<dyn LocalStore>,
    credentials: RefCell<Option<Credentials>>,
}

impl HttpBackend {
    pub fn new(
        config: BackendConfig,
        store: Rc<dyn LocalStore>,
    ) -> Result<Self, BackendError> {
        let client = Client::builder().build()?;
        let credentials = match store.get(CREDENTIALS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read stored credentials: {}", e);
                None
            }
        };

        Ok(Self {
            client,
            config,
            store,
            credentials: RefCell::new(credentials),
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, path)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.config.anon_key)
    }

    fn access_token(&self) -> Result<String, BackendError> {
        self.credentials
            .borrow()
            .as_ref()
            .map(|c| c.access_token.clone())
            .ok_or(BackendError::NotAuthenticated)
    }

    fn authorized(
        &self,
        method: Method,
        url: String,
    ) -> Result<RequestBuilder, BackendError> {
        Ok(self.request(method, url).bearer_auth(self.access_token()?))
    }

    /// Signed-in token when present, otherwise the public key.
    fn bearer(&self) -> String {
        self.access_token()
            .unwrap_or_else(|_| self.config.anon_key.clone())
    }

    fn remember(&self, credentials: Option<Credentials>) {
        let result = match &credentials {
            Some(c) => match serde_json::to_string(c) {
                Ok(raw) => self.store.set(CREDENTIALS_KEY, &raw),
                Err(e) => {
                    log::error!("Could not serialize credentials: {}", e);
                    Ok(())
                }
            },
            None => self.store.remove(CREDENTIALS_KEY),
        };
        if let Err(e) = result {
            log::warn!("Could not persist credentials: {}", e);
        }
        *self.credentials.borrow_mut() = credentials;
    }

    fn adopt_session(&self, token: TokenResponse) -> Identity {
        self.remember(Some(Credentials {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
        }));
        token.user.into()
    }

    async fn fetch_user(&self, access_token: &str) -> Result<Identity, BackendError> {
        let response = self
            .request(Method::GET, self.auth_url("user"))
            .bearer_auth(access_token)
            .send()
            .await?;
        let user: UserResponse = decode(response).await?;
        Ok(user.into())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Identity, BackendError> {
        let response = self
            .request(
                Method::POST,
                self.auth_url("token?grant_type=refresh_token"),
            )
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        let token: TokenResponse = decode(response).await?;
        Ok(self.adopt_session(token))
    }

    async fn auth_request(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<Response, AuthError> {
        let response = self
            .request(Method::POST, self.auth_url(path))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(BackendError::from)?;

        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.map_err(BackendError::from)?;
        Err(classify_auth_error(status, &body))
    }
}

async fn check(response: Response) -> Result<Response, BackendError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    Err(BackendError::Status { status, message })
}

async fn decode<T: DeserializeOwned>(
    response: Response,
) -> Result<T, BackendError> {
    let response = check(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for HttpBackend {
    async fn current_identity(
        &self,
    ) -> Result<Option<Identity>, BackendError> {
        let Some(credentials) = self.credentials.borrow().clone() else {
            return Ok(None);
        };

        match self.fetch_user(&credentials.access_token).await {
            Ok(identity) => Ok(Some(identity)),
            Err(e) if e.is_unauthorized() => {
                match self.refresh(&credentials.refresh_token).await {
                    Ok(identity) => Ok(Some(identity)),
                    Err(BackendError::Status { status, .. })
                        if (400..500).contains(&status) =>
                    {
                        log::info!("Stored session expired");
                        self.remember(None);
                        Ok(None)
                    }
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let response = self
            .auth_request("token?grant_type=password", email, password)
            .await?;
        let token: TokenResponse = decode(response).await?;
        Ok(self.adopt_session(token))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let response = self.auth_request("signup", email, password).await?;
        match decode(response).await? {
            SignUpResponse::Session(token) => Ok(self.adopt_session(token)),
            SignUpResponse::User(user) => {
                log::info!("Sign-up for {} awaits email confirmation", user.id);
                Err(AuthError::ConfirmationPending)
            }
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let request = self.authorized(Method::POST, self.auth_url("logout"));
        // Local credentials go regardless of what the backend says.
        self.remember(None);
        check(request?.send().await?).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl ProfileApi for HttpBackend {
    async fn profile_language(
        &self,
        user_id: Uuid,
    ) -> Result<Option<String>, BackendError> {
        let url = self.rest_url(&format!(
            "profiles?id=eq.{}&select=preferred_language",
            user_id
        ));
        let response = self.authorized(Method::GET, url)?.send().await?;
        let rows: Vec<ProfileRow> = decode(response).await?;

        Ok(rows.into_iter().next().and_then(|row| row.preferred_language))
    }

    async fn set_profile_language(
        &self,
        user_id: Uuid,
        language: Language,
    ) -> Result<(), BackendError> {
        let url = self.rest_url(&format!("profiles?id=eq.{}", user_id));
        let response = self
            .authorized(Method::PATCH, url)?
            .json(&serde_json::json!({ "preferred_language": language }))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl RobotApi for HttpBackend {
    async fn list_robots(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Robot>, BackendError> {
        let url = self.rest_url(&format!(
            "robots?user_id=eq.{}&select=*&order=created_at.desc",
            user_id
        ));
        let response = self.authorized(Method::GET, url)?.send().await?;
        decode(response).await
    }

    async fn create_robot(
        &self,
        data: &RobotCreate,
    ) -> Result<Robot, BackendError> {
        let response = self
            .authorized(Method::POST, self.rest_url("robots"))?
            .header("Prefer", "return=representation")
            .json(data)
            .send()
            .await?;
        let mut rows: Vec<Robot> = decode(response).await?;

        rows.pop().ok_or_else(|| {
            BackendError::Decode("insert returned no row".to_string())
        })
    }

    async fn delete_robot(&self, id: Uuid) -> Result<(), BackendError> {
        let url = self.rest_url(&format!("robots?id=eq.{}", id));
        let response = self.authorized(Method::DELETE, url)?.send().await?;
        check(response).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl SupportApi for HttpBackend {
    async fn submit_ticket(
        &self,
        ticket: &SupportTicket,
    ) -> Result<(), BackendError> {
        let response = self
            .request(Method::POST, self.rest_url("support_tickets"))
            .bearer_auth(self.bearer())
            .json(ticket)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
