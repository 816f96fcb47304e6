use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use signin_core::{
    AttemptId, AuthOutcome, Credentials, ErrorDisplay, LoginGateway, NavigationError, Navigator,
    View, interpret,
};

/// Response from login use case
#[derive(Debug, PartialEq)]
pub enum LoginResponse {
    /// The attempt resolved and its outcome has been applied
    Completed(AuthOutcome),
    /// A newer attempt started before this one resolved; its response was dropped
    Superseded(AttemptId),
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Navigation failed: {0}")]
    Navigation(#[from] NavigationError),
}

/// Login use case - submits credentials and moves the view on success
///
/// Every call to [`execute`](Self::execute) is tagged with a fresh
/// [`AttemptId`]. Only the newest attempt may touch the navigator or the
/// error display, so a slow response from an older attempt cannot overwrite
/// the state produced by a newer one. The latest-attempt check and the writes
/// it guards happen under one lock, as does the reset at the start of an
/// attempt.
pub struct LoginUseCase<G, N, D>
where
    G: LoginGateway,
    N: Navigator,
    D: ErrorDisplay,
{
    gateway: G,
    navigator: N,
    error_display: D,
    latest_attempt: AtomicU64,
    view_lock: Mutex<()>,
}

impl<G, N, D> LoginUseCase<G, N, D>
where
    G: LoginGateway,
    N: Navigator,
    D: ErrorDisplay,
{
    pub fn new(gateway: G, navigator: N, error_display: D) -> Self {
        Self {
            gateway,
            navigator,
            error_display,
            latest_attempt: AtomicU64::new(0),
            view_lock: Mutex::new(()),
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `credentials` - Email and password as currently entered in the form
    ///
    /// # Returns
    /// The applied outcome, or `Superseded` if a newer attempt took over
    /// while this one was waiting on the network.
    #[tracing::instrument(
        name = "LoginUseCase::execute",
        skip_all,
        fields(attempt = tracing::field::Empty)
    )]
    pub async fn execute(&self, credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        let attempt = self.begin_attempt();
        tracing::Span::current().record("attempt", attempt.value());

        // A new attempt always starts from a clean error line
        {
            let _view = self.view_lock.lock().await;
            self.error_display.show(None).await;
        }

        let result = self.gateway.submit(credentials).await;

        let _view = self.view_lock.lock().await;
        if !self.is_latest(attempt) {
            tracing::debug!("Dropping response of superseded login attempt");
            return Ok(LoginResponse::Superseded(attempt));
        }

        if let Err(failure) = &result {
            tracing::warn!(%failure, "Login request failed");
        }

        let outcome = interpret(result);
        self.apply(&outcome).await?;

        Ok(LoginResponse::Completed(outcome))
    }

    /// Attempt id that the next call to `execute` will supersede.
    pub fn latest_attempt(&self) -> AttemptId {
        AttemptId::new(self.latest_attempt.load(Ordering::SeqCst))
    }

    fn begin_attempt(&self) -> AttemptId {
        AttemptId::new(self.latest_attempt.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn is_latest(&self, attempt: AttemptId) -> bool {
        self.latest_attempt() == attempt
    }

    async fn apply(&self, outcome: &AuthOutcome) -> Result<(), LoginError> {
        match outcome.error_message() {
            None => {
                tracing::info!("Login succeeded");
                self.navigator.navigate(View::Dashboard).await?;
            }
            Some(message) => {
                tracing::info!(?message, "Login rejected");
                self.error_display.show(Some(message)).await;
            }
        }
        Ok(())
    }
}
