use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use signin_core::{Credentials, LoginGateway, RawResponse, TransportFailure};

pub struct ReqwestLoginGateway {
    http_client: Client,
    base_url: String,
}

impl ReqwestLoginGateway {
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Resolve `api/login` against the base URL, the way a browser resolves
    /// a relative link against the page it is on.
    fn login_url(&self) -> Result<Url, TransportFailure> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| TransportFailure::InvalidEndpoint(e.to_string()))?;
        base.join(LOGIN_PATH)
            .map_err(|e| TransportFailure::InvalidEndpoint(e.to_string()))
    }
}

#[async_trait::async_trait]
impl LoginGateway for ReqwestLoginGateway {
    #[tracing::instrument(name = "Submitting login", skip_all)]
    async fn submit(&self, credentials: &Credentials) -> Result<RawResponse, TransportFailure> {
        let url = self.login_url()?;

        let request_body = LoginRequest {
            email: credentials.email(),
            password: credentials.password().expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TransportFailure::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportFailure::Status(status.as_u16()));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportFailure::MalformedBody(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), "Login endpoint answered");

        Ok(RawResponse::new(body))
    }
}

const LOGIN_PATH: &str = "api/login";

#[derive(serde::Serialize, Debug)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, faker::internet::en::SafeEmail};
    use secrecy::Secret;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(base_url: String) -> ReqwestLoginGateway {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        ReqwestLoginGateway::new(base_url, http_client)
    }

    fn credentials(email: &str) -> Credentials {
        Credentials::new(email, Secret::new("x".to_string()))
    }

    #[tokio::test]
    async fn posts_email_and_password_as_json() {
        let mock_server = MockServer::start().await;
        let email: String = SafeEmail().fake();

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"email": email, "password": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"id": 1}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = gateway(mock_server.uri())
            .submit(&credentials(&email))
            .await
            .unwrap();

        assert_eq!(response.body(), &json!({"user": {"id": 1}}));
    }

    #[tokio::test]
    async fn login_path_is_relative_to_base_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": null})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = gateway(format!("{}/app/", mock_server.uri()))
            .submit(&credentials("a@b.com"))
            .await
            .unwrap();

        assert_eq!(response.body(), &json!({"user": null}));
    }

    #[tokio::test]
    async fn server_error_status_is_transport_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"user": {"id": 1}})))
            .mount(&mock_server)
            .await;

        let result = gateway(mock_server.uri())
            .submit(&credentials("a@b.com"))
            .await;

        assert_eq!(result, Err(TransportFailure::Status(500)));
    }

    #[tokio::test]
    async fn unauthorized_status_is_transport_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = gateway(mock_server.uri())
            .submit(&credentials("a@b.com"))
            .await;

        assert_eq!(result, Err(TransportFailure::Status(401)));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&mock_server)
            .await;

        let result = gateway(mock_server.uri())
            .submit(&credentials("a@b.com"))
            .await;

        assert!(matches!(result, Err(TransportFailure::MalformedBody(_))));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"user": {"id": 1}}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let result = gateway(mock_server.uri())
            .submit(&credentials("a@b.com"))
            .await;

        assert!(matches!(result, Err(TransportFailure::Network(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_network_failure() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let result = gateway(format!("http://{address}"))
            .submit(&credentials("a@b.com"))
            .await;

        assert!(matches!(result, Err(TransportFailure::Network(_))));
    }

    #[tokio::test]
    async fn invalid_base_url_is_rejected() {
        let result = gateway("not a url".to_string())
            .submit(&credentials("a@b.com"))
            .await;

        assert!(matches!(result, Err(TransportFailure::InvalidEndpoint(_))));
    }
}
