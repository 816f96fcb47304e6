use std::sync::Arc;
use tokio::sync::RwLock;

use signin_core::{NavigationError, NavigationStateMachine, Navigator, View};

#[derive(Debug, Default, Clone)]
pub struct InMemoryNavigator {
    machine: Arc<RwLock<NavigationStateMachine>>,
}

impl InMemoryNavigator {
    pub fn new() -> Self {
        Self {
            machine: Arc::new(RwLock::new(NavigationStateMachine::new())),
        }
    }
}

#[async_trait::async_trait]
impl Navigator for InMemoryNavigator {
    async fn navigate(&self, target: View) -> Result<(), NavigationError> {
        let mut machine = self.machine.write().await;
        if machine.transition(target)? {
            tracing::debug!(?target, "Navigated");
        }
        Ok(())
    }

    async fn current(&self) -> View {
        self.machine.read().await.current()
    }
}
