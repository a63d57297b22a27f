use super::delete_flight::DeleteFlightResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_handler_common::FlightId;

#[derive(Debug)]
pub(crate) struct DeleteFlightRequest {
    path: String,
}

impl DeleteFlightRequest {
    pub(crate) fn new(id: FlightId) -> Self { Self { path: format!("/flights/{id}/") } }
}

impl NoBodyHTTPRequestType for DeleteFlightRequest {}

impl HTTPRequestType for DeleteFlightRequest {
    type Response = DeleteFlightResponse;
    fn endpoint(&self) -> &str { &self.path }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
