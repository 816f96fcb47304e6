use std::fmt;

pub const INVALID_CREDENTIALS_TEXT: &str = "邮箱或密码错误，请重试";
pub const SERVER_ERROR_TEXT: &str = "服务器错误";

/// Message shown under the login form after a failed attempt.
///
/// The "no message" state is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorMessage {
    InvalidCredentials,
    ServerError,
}

impl AuthErrorMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => INVALID_CREDENTIALS_TEXT,
            Self::ServerError => SERVER_ERROR_TEXT,
        }
    }
}

impl AsRef<str> for AuthErrorMessage {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AuthErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
