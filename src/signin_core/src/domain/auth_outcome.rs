use serde::{Deserialize, Serialize};

use crate::domain::auth_error_message::AuthErrorMessage;

/// The `user` value returned by the login endpoint.
///
/// Kept as raw JSON: nothing beyond its presence is inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(serde_json::Value);

impl UserRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl AsRef<serde_json::Value> for UserRecord {
    fn as_ref(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Classified result of one login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Backend accepted the credentials
    Success(UserRecord),
    /// Backend answered but returned no user
    InvalidCredentials,
    /// Transport failure, non-2xx status, or an unexpected body shape
    ServerError,
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Message to display for this outcome, `None` on success.
    pub fn error_message(&self) -> Option<AuthErrorMessage> {
        match self {
            Self::Success(_) => None,
            Self::InvalidCredentials => Some(AuthErrorMessage::InvalidCredentials),
            Self::ServerError => Some(AuthErrorMessage::ServerError),
        }
    }
}
