use async_trait::async_trait;

use crate::domain::{
    auth_error_message::AuthErrorMessage,
    navigation::{NavigationError, View},
};

/// Port trait for the router owned by the view layer
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, target: View) -> Result<(), NavigationError>;
    async fn current(&self) -> View;
}

/// Port trait for the error line shown under the login form
#[async_trait]
pub trait ErrorDisplay: Send + Sync {
    async fn show(&self, message: Option<AuthErrorMessage>);
    async fn current(&self) -> Option<AuthErrorMessage>;
}
