use thiserror::Error;

use crate::i18n::{LocalizedText, Translations};

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    Decode(String),

    #[error("No credential is stored for this browser")]
    NotAuthenticated,
}

impl BackendError {
    /// True when the backend rejected the stored credential.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 401,
            Self::NotAuthenticated => true,
            _ => false,
        }
    }
}

/// Classified outcome of a failed sign-in or sign-up.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email address has not been confirmed")]
    EmailUnconfirmed,

    #[error("An account with this email already exists")]
    AlreadyRegistered,

    /// The account exists but no session is issued until the email is
    /// confirmed.
    #[error("Account created, email confirmation pending")]
    ConfirmationPending,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl AuthError {
    pub fn message(&self) -> LocalizedText {
        match self {
            Self::MissingCredentials => |t| t.errors.fill_all_fields,
            Self::InvalidCredentials => |t| t.errors.invalid_credentials,
            Self::EmailUnconfirmed => |t| t.errors.email_unconfirmed,
            Self::AlreadyRegistered => |t| t.errors.already_registered,
            Self::ConfirmationPending => |t| t.errors.confirmation_pending,
            Self::Backend(_) => |t| t.errors.generic,
        }
    }

    pub fn localized(&self, t: &Translations) -> &'static str {
        self.message()(t)
    }
}

/// Form input rejected before any backend call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{0}' is required")]
    Required(&'static str),

    #[error("Field '{field}' exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Unknown value '{value}' for '{field}'")]
    UnknownChoice { field: &'static str, value: String },
}

impl ValidationError {
    pub fn message(&self) -> LocalizedText {
        match self {
            Self::Required(_) => |t| t.errors.fill_all_fields,
            Self::InvalidEmail => |t| t.errors.invalid_email,
            Self::PasswordTooShort { .. } => |t| t.errors.password_too_short,
            Self::PasswordMismatch => |t| t.errors.passwords_mismatch,
            Self::TooLong { .. } | Self::UnknownChoice { .. } => {
                |t| t.errors.invalid_form
            }
        }
    }

    pub fn localized(&self, t: &Translations) -> &'static str {
        self.message()(t)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Local storage rejected write to '{0}'")]
    WriteRejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failure to assemble the browser services at startup.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
