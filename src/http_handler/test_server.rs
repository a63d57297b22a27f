//! In-process axum stub backing the request tests.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const NOT_FOUND_BODY: &str = r#"{"detail": "Not found."}"#;

#[derive(Debug, Clone)]
pub struct StubRoute {
    method: &'static str,
    path: &'static str,
    body_contains: Option<String>,
    delay: Option<Duration>,
    status: u16,
    body: String,
}

impl StubRoute {
    pub fn new(method: &'static str, path: &'static str, status: u16, body: &str) -> Self {
        Self { method, path, body_contains: None, delay: None, status, body: body.to_string() }
    }

    /// Only match requests whose body contains `needle`.
    pub fn when_body_contains(mut self, needle: &str) -> Self {
        self.body_contains = Some(needle.to_string());
        self
    }

    /// Hold the response back for `delay`.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn matches(&self, req: &RecordedRequest) -> bool {
        self.method == req.method
            && self.path == req.path
            && self.body_contains.as_ref().is_none_or(|n| req.body_text().contains(n.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String { String::from_utf8_lossy(&self.body).to_string() }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Vec<StubRoute>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct TestServer {
    addr: std::net::SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub async fn spawn(routes: Vec<StubRoute>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState { routes: Arc::new(routes), requests: Arc::clone(&requests) };
        let router = Router::new().fallback(answer).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        Self { addr, requests }
    }

    /// Base URL in the shape the client expects, `http://127.0.0.1:<port>/api`.
    pub fn api_url(&self) -> String { format!("http://{}/api", self.addr) }

    pub fn requests(&self) -> Vec<RecordedRequest> { self.requests.lock().unwrap().clone() }
}

async fn answer(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), String::from_utf8_lossy(v.as_bytes()).to_string()))
            .collect(),
        body: body.to_vec(),
    };
    let route = state.routes.iter().find(|r| r.matches(&request)).cloned();
    state.requests.lock().unwrap().push(request);
    let Some(route) = route else {
        return (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "application/json")], NOT_FOUND_BODY)
            .into_response();
    };
    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }
    let status = StatusCode::from_u16(route.status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], route.body).into_response()
}
