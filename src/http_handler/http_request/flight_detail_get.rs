use super::flight::FlightResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_handler_common::FlightId;

#[derive(Debug)]
pub(crate) struct FlightDetailRequest {
    path: String,
}

impl FlightDetailRequest {
    pub(crate) fn new(id: FlightId) -> Self { Self { path: format!("/flights/{id}/") } }
}

impl NoBodyHTTPRequestType for FlightDetailRequest {}

impl HTTPRequestType for FlightDetailRequest {
    type Response = FlightResponse;
    fn endpoint(&self) -> &str { &self.path }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
