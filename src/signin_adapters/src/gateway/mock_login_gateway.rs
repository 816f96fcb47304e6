use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use signin_core::{Credentials, LoginGateway, RawResponse, TransportFailure};

/// Gateway that answers every submission with the same scripted result.
#[derive(Debug, Clone)]
pub struct MockLoginGateway {
    result: Result<RawResponse, TransportFailure>,
    submissions: Arc<AtomicUsize>,
}

impl MockLoginGateway {
    pub fn new(result: Result<RawResponse, TransportFailure>) -> Self {
        Self {
            result,
            submissions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Accept every login, returning `user` as the user record.
    pub fn accepting(user: serde_json::Value) -> Self {
        Self::new(Ok(RawResponse::new(serde_json::json!({ "user": user }))))
    }

    /// Reject every login with `{"user": null}`.
    pub fn rejecting() -> Self {
        Self::new(Ok(RawResponse::new(serde_json::json!({ "user": null }))))
    }

    pub fn failing(failure: TransportFailure) -> Self {
        Self::new(Err(failure))
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LoginGateway for MockLoginGateway {
    async fn submit(&self, _credentials: &Credentials) -> Result<RawResponse, TransportFailure> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
