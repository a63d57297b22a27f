use crate::config::AppConfig;
use crate::http_handler::http_client::HTTPClient;
use crate::session::cookie_jar::CookieJar;
use std::sync::Arc;

/// Shared handles every command needs: the resolved configuration and the
/// HTTP client bound to the configured API and token file.
#[derive(Clone, Debug)]
pub struct Keychain {
    /// Resolved environment and command line configuration.
    config: Arc<AppConfig>,
    /// The HTTP client for all backend requests.
    client: Arc<HTTPClient>,
}

impl Keychain {
    /// Builds the client for `config.api_base_url()` with its cookie jar at
    /// `config.token_file()`.
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let jar = CookieJar::new(config.token_file().clone());
        let client = Arc::new(HTTPClient::new(&config.api_base_url(), jar)?);
        Ok(Self { config: Arc::new(config), client })
    }

    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    pub fn config(&self) -> &AppConfig { &self.config }
}
