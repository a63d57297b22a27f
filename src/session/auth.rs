use super::cookie_jar::CookieJar;
use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::HTTPError,
    http_request::{
        login_post::LoginRequest, register_post::RegisterRequest,
        request_common::JSONBodyHTTPRequestType,
    },
    http_response::response_common::ResponseError,
};
use crate::navigation::Route;
use crate::{error, info};
use std::{fmt, io};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Debug)]
pub(crate) enum SessionError {
    /// The server refused the credentials or the form, with the message to show inline.
    Rejected(String),
    Storage(io::Error),
    Http(HTTPError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Rejected(msg) => f.write_str(msg),
            SessionError::Storage(err) => write!(f, "Could not store session tokens: {err}"),
            SessionError::Http(err) => write!(f, "Request failed: {err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(value: io::Error) -> Self { SessionError::Storage(value) }
}

/// Turns a failed auth call into the inline message, `fallback` when the
/// server sent nothing readable.
fn rejection(err: HTTPError, fallback: &str) -> SessionError {
    match err {
        HTTPError::HTTPResponseError(
            ResponseError::Unauthorized(detail) | ResponseError::BadRequest(detail),
        ) => SessionError::Rejected(detail.message().unwrap_or(fallback).to_string()),
        other => SessionError::Http(other),
    }
}

/// Exchanges credentials for tokens and stores both in the jar.
///
/// Returns the view to continue to, which is always the flight log.
pub(crate) async fn login(client: &HTTPClient, request: &LoginRequest) -> Result<Route, SessionError> {
    info!("Login attempt started for {}", request.username);
    let response = request.send_request(client).await.map_err(|err| {
        error!("Login error: {err}");
        rejection(err, LOGIN_FAILED)
    })?;
    client.jar().store_tokens(response.access(), response.refresh()).await?;
    info!(
        "Logged in as {}, tokens stored in {}",
        response.username().unwrap_or(&request.username),
        client.jar().path().display()
    );
    Ok(Route::Flights)
}

/// Creates an account. The backend logs the new user in right away.
pub(crate) async fn register(
    client: &HTTPClient,
    request: &RegisterRequest,
) -> Result<Route, SessionError> {
    if request.password != request.password2 {
        return Err(SessionError::Rejected("Passwords do not match".to_string()));
    }
    let response = request.send_request(client).await.map_err(|err| {
        error!("Registration error: {err}");
        rejection(err, REGISTRATION_FAILED)
    })?;
    client.jar().store_tokens(response.access(), response.refresh()).await?;
    info!("Registered {}", response.username().unwrap_or(&request.username));
    Ok(Route::Flights)
}

/// Drops both tokens. Always lands on the login view.
pub(crate) async fn logout(jar: &CookieJar) -> Result<Route, SessionError> {
    jar.clear_tokens().await?;
    info!("Logged out");
    Ok(Route::Login)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_handler::test_server::{StubRoute, TestServer};
    use crate::session::cookie_jar::{ACCESS_TOKEN, REFRESH_TOKEN};

    fn credentials() -> LoginRequest {
        LoginRequest { username: "maverick".to_string(), password: "danger-zone".to_string() }
    }

    #[tokio::test]
    async fn successful_login_stores_tokens_and_goes_to_flights() {
        let server = TestServer::spawn(vec![StubRoute::new(
            "POST",
            "/api/login/",
            200,
            r#"{"access": "acc-123", "refresh": "ref-456", "username": "maverick", "email": "m@navy.mil"}"#,
        )])
        .await;
        let dir = tempfile::tempdir().unwrap();
        let client = HTTPClient::new(&server.api_url(), CookieJar::new(dir.path().join("jar"))).unwrap();

        let route = login(&client, &credentials()).await.unwrap();

        assert_eq!(route, Route::Flights);
        assert_eq!(client.jar().get(ACCESS_TOKEN).await.as_deref(), Some("acc-123"));
        assert_eq!(client.jar().get(REFRESH_TOKEN).await.as_deref(), Some("ref-456"));
        let sent = &server.requests()[0];
        assert_eq!(sent.header("authorization"), None);
        assert!(sent.header("content-type").unwrap().starts_with("application/json"));
        let body: serde_json::Value = serde_json::from_str(&sent.body_text()).unwrap();
        assert_eq!(body["username"], "maverick");
        assert_eq!(body["password"], "danger-zone");
    }

    #[tokio::test]
    async fn rejected_login_shows_server_message_and_stores_nothing() {
        let server = TestServer::spawn(vec![StubRoute::new(
            "POST",
            "/api/login/",
            401,
            r#"{"error": "Invalid credentials"}"#,
        )])
        .await;
        let dir = tempfile::tempdir().unwrap();
        let client = HTTPClient::new(&server.api_url(), CookieJar::new(dir.path().join("jar"))).unwrap();

        let err = login(&client, &credentials()).await.unwrap_err();

        assert!(matches!(&err, SessionError::Rejected(msg) if msg == "Invalid credentials"));
        assert_eq!(client.jar().get(ACCESS_TOKEN).await, None);
        assert!(!client.jar().path().exists());
    }

    #[tokio::test]
    async fn rejected_login_without_message_uses_fallback() {
        let server = TestServer::spawn(vec![StubRoute::new("POST", "/api/login/", 400, "not json")]).await;
        let dir = tempfile::tempdir().unwrap();
        let client = HTTPClient::new(&server.api_url(), CookieJar::new(dir.path().join("jar"))).unwrap();

        let err = login(&client, &credentials()).await.unwrap_err();

        assert_eq!(err.to_string(), LOGIN_FAILED);
    }

    #[tokio::test]
    async fn register_checks_confirmation_locally() {
        let dir = tempfile::tempdir().unwrap();
        let client = HTTPClient::new("http://127.0.0.1:9/api", CookieJar::new(dir.path().join("jar"))).unwrap();
        let request = RegisterRequest {
            username: "goose".to_string(),
            email: "goose@navy.mil".to_string(),
            password: "a".to_string(),
            password2: "b".to_string(),
        };
        let err = register(&client, &request).await.unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[tokio::test]
    async fn successful_registration_stores_tokens_and_goes_to_flights() {
        let server = TestServer::spawn(vec![StubRoute::new(
            "POST",
            "/api/register/",
            201,
            r#"{"access": "a1", "refresh": "r1", "user": {"id": 7, "username": "goose", "email": "goose@navy.mil"}}"#,
        )])
        .await;
        let dir = tempfile::tempdir().unwrap();
        let client = HTTPClient::new(&server.api_url(), CookieJar::new(dir.path().join("jar"))).unwrap();
        let request = RegisterRequest {
            username: "goose".to_string(),
            email: "goose@navy.mil".to_string(),
            password: "talk-to-me".to_string(),
            password2: "talk-to-me".to_string(),
        };

        let route = register(&client, &request).await.unwrap();

        assert_eq!(route, Route::Flights);
        assert_eq!(client.jar().get(ACCESS_TOKEN).await.as_deref(), Some("a1"));
        assert_eq!(client.jar().get(REFRESH_TOKEN).await.as_deref(), Some("r1"));
        let sent = &server.requests()[0];
        assert_eq!(sent.header("authorization"), None);
        let body: serde_json::Value = serde_json::from_str(&sent.body_text()).unwrap();
        assert_eq!(body["password2"], "talk-to-me");
        assert_eq!(body["email"], "goose@navy.mil");
    }

    #[tokio::test]
    async fn logout_clears_both_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("jar"));
        jar.store_tokens("a", "r").await.unwrap();
        assert_eq!(logout(&jar).await.unwrap(), Route::Login);
        assert_eq!(jar.get(ACCESS_TOKEN).await, None);
        assert_eq!(jar.get(REFRESH_TOKEN).await, None);
    }
}
