use super::register::RegisterResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /register/ endpoint.
///
/// `password2` is the confirmation field, the backend rejects the request
/// when it differs from `password`.
#[derive(serde::Serialize, Debug, Clone)]
pub(crate) struct RegisterRequest {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) password2: String,
}

impl JSONBodyHTTPRequestType for RegisterRequest {
    type Body = RegisterRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RegisterRequest {
    type Response = RegisterResponse;
    fn endpoint(&self) -> &'static str { "/register/" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn requires_auth(&self) -> bool { false }
}
