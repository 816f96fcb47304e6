use std::sync::Arc;
use tokio::sync::RwLock;

use signin_core::{AuthErrorMessage, ErrorDisplay};

/// Error line shared between the login flow and whatever renders the form.
#[derive(Debug, Default, Clone)]
pub struct SharedErrorDisplay {
    message: Arc<RwLock<Option<AuthErrorMessage>>>,
}

impl SharedErrorDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ErrorDisplay for SharedErrorDisplay {
    async fn show(&self, message: Option<AuthErrorMessage>) {
        *self.message.write().await = message;
    }

    async fn current(&self) -> Option<AuthErrorMessage> {
        *self.message.read().await
    }
}
