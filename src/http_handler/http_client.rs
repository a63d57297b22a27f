use crate::session::cookie_jar::{ACCESS_TOKEN, CookieJar};

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the AirFleet backend.
/// No request timeout is set: narrative generation round-trips through a
/// language model on the server and may take arbitrarily long.
/// Bearer credentials are not held in memory, they are looked up in the
/// [`CookieJar`] whenever an authenticated request is built.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Token storage shared with the session flows.
    jar: CookieJar,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8000/api"`).
    /// * `jar` – Where the access and refresh tokens live.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance, or the builder error if the TLS
    /// backend could not be initialized.
    pub(crate) fn new(base_url: &str, jar: CookieJar) -> Result<HTTPClient, reqwest::Error> {
        Ok(HTTPClient {
            client: reqwest::Client::builder().build()?,
            base_url: String::from(base_url.trim_end_matches('/')),
            jar,
        })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
    /// Returns the token storage backing this client.
    pub(crate) fn jar(&self) -> &CookieJar { &self.jar }

    /// Reads the current bearer token, `None` when the user is logged out.
    pub(crate) async fn access_token(&self) -> Option<String> { self.jar.get(ACCESS_TOKEN).await }
}
