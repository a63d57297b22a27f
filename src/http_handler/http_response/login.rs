use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /login/ endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct LoginResponse {
    /// Short lived bearer token.
    access: String,
    /// Token used to mint new access tokens.
    refresh: String,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for LoginResponse {}

impl LoginResponse {
    pub(crate) fn access(&self) -> &str { &self.access }
    pub(crate) fn refresh(&self) -> &str { &self.refresh }
    pub(crate) fn username(&self) -> Option<&str> { self.username.as_deref() }
    pub(crate) fn email(&self) -> Option<&str> { self.email.as_deref() }
}
