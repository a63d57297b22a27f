use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{connection_probe_head::ConnectionProbeRequest, request_common::NoBodyHTTPRequestType},
};
use std::{env, path::PathBuf};

/// Server root used when `AIRFLEET_API_URL` is not set.
pub(crate) const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
/// Path segment every API endpoint lives under.
const API_SUFFIX: &str = "/api";
const NOT_SET: &str = "Not set";

pub(crate) const API_URL_VAR: &str = "AIRFLEET_API_URL";
pub(crate) const DEPLOY_URL_VAR: &str = "AIRFLEET_DEPLOY_URL";
pub(crate) const TOKEN_FILE_VAR: &str = "AIRFLEET_TOKEN_FILE";

/// Resolved runtime configuration of the client.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    /// The server root as configured, `None` when the default is in use.
    server_url: Option<String>,
    deployment_url: Option<String>,
    token_file: PathBuf,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `api_override` takes precedence over `AIRFLEET_API_URL`, it is what
    /// the `--api-url` command line flag feeds in.
    pub(crate) fn from_env(api_override: Option<String>) -> Self {
        Self::from_lookup(api_override, |var| env::var(var).ok())
    }

    /// Resolves against `lookup` instead of the process environment. An
    /// explicit `api_override` wins over the `AIRFLEET_API_URL` entry.
    pub(crate) fn from_lookup<F>(api_override: Option<String>, lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let server_url = api_override.or_else(|| lookup(API_URL_VAR));
        let deployment_url = lookup(DEPLOY_URL_VAR);
        let token_file = lookup(TOKEN_FILE_VAR).map_or_else(default_token_file, PathBuf::from);
        Self::new(server_url, deployment_url, token_file)
    }

    pub(crate) fn new(
        server_url: Option<String>,
        deployment_url: Option<String>,
        token_file: PathBuf,
    ) -> Self {
        let server_url = server_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let deployment_url = deployment_url.filter(|url| !url.trim().is_empty());
        Self { server_url, deployment_url, token_file }
    }

    /// The API base every endpoint path is appended to, e.g. `http://localhost:8000/api`.
    pub(crate) fn api_base_url(&self) -> String {
        let root = self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL);
        format!("{root}{API_SUFFIX}")
    }

    pub(crate) fn token_file(&self) -> &PathBuf { &self.token_file }

    pub(crate) fn debug_info(&self) -> DebugInfo {
        let configured = self.server_url.clone().unwrap_or_else(|| NOT_SET.to_string());
        DebugInfo {
            api_url: configured.clone(),
            full_api_url: self.api_base_url(),
            deployment_url: self.deployment_url.clone().unwrap_or_else(|| NOT_SET.to_string()),
            public_api_url: configured,
        }
    }
}

fn default_token_file() -> PathBuf {
    env::var_os("HOME").map_or_else(
        || PathBuf::from(".airfleet_cookies"),
        |home| PathBuf::from(home).join(".airfleet").join("cookies"),
    )
}

/// Environment snapshot shown by the debug view.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DebugInfo {
    api_url: String,
    full_api_url: String,
    #[serde(rename = "vercelUrl")]
    deployment_url: String,
    #[serde(rename = "nextPublicApiUrl")]
    public_api_url: String,
}

impl DebugInfo {
    pub(crate) fn full_api_url(&self) -> &str { &self.full_api_url }

    /// Pretty printed JSON, two space indentation.
    pub(crate) fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Probes the API with a `HEAD /register/` request and describes the outcome.
///
/// Any HTTP status counts as a reachable API, only transport failures are
/// reported as a failed connection.
pub(crate) async fn test_api_connection(client: &HTTPClient) -> String {
    let probe = ConnectionProbeRequest {}.send_request(client).await;
    match probe {
        Ok(status) => format!(
            "API connection test: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        ),
        Err(err) => format!("API connection failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_handler::test_server::{StubRoute, TestServer};
    use crate::session::cookie_jar::CookieJar;

    fn config(url: Option<&str>) -> AppConfig {
        AppConfig::new(url.map(String::from), None, PathBuf::from("cookies"))
    }

    #[test]
    fn defaults_to_localhost_api() {
        let cfg = config(None);
        assert_eq!(cfg.api_base_url(), "http://localhost:8000/api");
        let info = cfg.debug_info();
        assert_eq!(info.api_url, NOT_SET);
        assert_eq!(info.deployment_url, NOT_SET);
        assert_eq!(info.full_api_url(), "http://localhost:8000/api");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let cfg = config(Some("https://airfleet.example.com/"));
        assert_eq!(cfg.api_base_url(), "https://airfleet.example.com/api");
        assert_eq!(cfg.debug_info().api_url, "https://airfleet.example.com");
    }

    #[test]
    fn command_line_url_beats_environment() {
        let env = |var: &str| match var {
            API_URL_VAR => Some("https://env.example.com".to_string()),
            TOKEN_FILE_VAR => Some("/var/lib/airfleet/jar".to_string()),
            _ => None,
        };
        let cfg = AppConfig::from_lookup(Some("https://cli.example.com/".to_string()), env);
        assert_eq!(cfg.api_base_url(), "https://cli.example.com/api");
        assert_eq!(cfg.token_file(), &PathBuf::from("/var/lib/airfleet/jar"));

        let cfg = AppConfig::from_lookup(None, env);
        assert_eq!(cfg.api_base_url(), "https://env.example.com/api");
        assert_eq!(cfg.debug_info().deployment_url, NOT_SET);
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        assert_eq!(config(Some("  ")).api_base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn debug_info_serializes_camel_case() {
        let json = config(None).debug_info().to_pretty_json().unwrap();
        assert!(json.contains("\"fullApiUrl\": \"http://localhost:8000/api\""));
        assert!(json.contains("\"vercelUrl\": \"Not set\""));
        assert!(json.contains("\"nextPublicApiUrl\": \"Not set\""));
    }

    #[tokio::test]
    async fn connection_probe_reports_status() {
        let server = TestServer::spawn(vec![StubRoute::new("HEAD", "/api/register/", 405, "")]).await;
        let dir = tempfile::tempdir().unwrap();
        let client = HTTPClient::new(&server.api_url(), CookieJar::new(dir.path().join("jar"))).unwrap();
        let report = test_api_connection(&client).await;
        assert_eq!(report, "API connection test: 405 Method Not Allowed");
    }

    #[tokio::test]
    async fn connection_probe_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let client = HTTPClient::new("http://127.0.0.1:9/api", CookieJar::new(dir.path().join("jar"))).unwrap();
        let report = test_api_connection(&client).await;
        assert!(report.starts_with("API connection failed: "), "{report}");
    }
}
