use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user as issued by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// Snapshot of who is logged in.
///
/// `initializing` starts out true and flips to false exactly once, when the
/// session store has asked the backend for an existing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub initializing: bool,
}

impl SessionState {
    pub fn initializing() -> Self {
        Self {
            identity: None,
            initializing: true,
        }
    }

    pub fn resolved(identity: Option<Identity>) -> Self {
        Self {
            identity,
            initializing: false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.initializing
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initializing()
    }
}

/// Token pair kept in local storage between page loads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
}
