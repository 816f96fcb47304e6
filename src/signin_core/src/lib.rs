pub mod domain;
pub mod interpreter;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    attempt_id::AttemptId,
    auth_error_message::{AuthErrorMessage, INVALID_CREDENTIALS_TEXT, SERVER_ERROR_TEXT},
    auth_outcome::{AuthOutcome, UserRecord},
    credentials::Credentials,
    navigation::{NavigationError, NavigationStateMachine, View},
    raw_response::RawResponse,
};

pub use interpreter::interpret;

pub use ports::{
    services::{LoginGateway, TransportFailure},
    view::{ErrorDisplay, Navigator},
};
