use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use secrecy::Secret;
use signin_adapters::{
    InMemoryNavigator, ReqwestLoginGateway, SharedErrorDisplay, config::ClientSetting,
};
use signin_application::{LoginResponse, LoginUseCase};
use signin_core::{Credentials, ErrorDisplay, Navigator, View};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal front end for the login flow: prompts for credentials until the
/// backend accepts them or stdin closes.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = ClientSetting::load()?;

    let http_client = HttpClient::builder()
        .timeout(config.api.timeout())
        .build()?;
    let gateway = ReqwestLoginGateway::new(config.api.base_url.clone(), http_client);

    // The view keeps its own handles on the navigator and the error line
    let navigator = InMemoryNavigator::new();
    let error_display = SharedErrorDisplay::new();
    let login = LoginUseCase::new(gateway, navigator.clone(), error_display.clone());

    tracing::info!(base_url = %config.api.base_url, "Starting login");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut credentials = Credentials::default();

    while navigator.current().await == View::LoginForm {
        let Some(email) = prompt(&mut lines, "Email: ").await? else {
            break;
        };
        let Some(password) = prompt(&mut lines, "Password: ").await? else {
            break;
        };
        fill_credentials(&mut credentials, email, password);

        if let LoginResponse::Completed(outcome) = login.execute(&credentials).await? {
            tracing::debug!(success = outcome.is_success(), "Login attempt finished");
        }

        if let Some(message) = error_display.current().await {
            print_line(message.as_str()).await?;
        }
    }

    if navigator.current().await == View::Dashboard {
        print_line("Dashboard").await?;
    }

    Ok(())
}

/// Copy the typed lines into the form fields as-is; the backend decides validity.
fn fill_credentials(credentials: &mut Credentials, email: String, password: String) {
    credentials.set_email(email);
    credentials.set_password(Secret::new(password));
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    Ok(lines.next_line().await?)
}

async fn print_line(text: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{text}\n").as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
