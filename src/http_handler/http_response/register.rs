use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub(crate) struct RegisterResponse {
    access: String,
    refresh: String,
    #[serde(default)]
    user: Option<RegisteredUser>,
}

#[derive(serde::Deserialize, Debug)]
pub(crate) struct RegisteredUser {
    username: String,
    #[serde(default)]
    email: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for RegisterResponse {}

impl RegisterResponse {
    pub(crate) fn access(&self) -> &str { &self.access }
    pub(crate) fn refresh(&self) -> &str { &self.refresh }
    pub(crate) fn username(&self) -> Option<&str> { self.user.as_ref().map(|u| u.username.as_str()) }
    pub(crate) fn email(&self) -> Option<&str> { self.user.as_ref().and_then(|u| u.email.as_deref()) }
}
