pub mod attempt_id;
pub mod auth_error_message;
pub mod auth_outcome;
pub mod credentials;
pub mod navigation;
pub mod raw_response;
