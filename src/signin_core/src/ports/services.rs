use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{credentials::Credentials, raw_response::RawResponse};

/// Anything that prevented a usable response body from being read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportFailure {
    #[error("Invalid login endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected status code {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// Port trait for sending credentials to the login endpoint
///
/// Calls are independent: a second `submit` while the first is still in
/// flight is allowed and is not de-duplicated here.
#[async_trait]
pub trait LoginGateway: Send + Sync {
    async fn submit(&self, credentials: &Credentials) -> Result<RawResponse, TransportFailure>;
}
