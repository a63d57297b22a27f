use super::narrative::NarrativeResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_handler_common::{Flight, NarrativeRequest};

/// Request type for the /generate-narrative/ endpoint.
#[derive(Debug)]
pub(crate) struct GenerateNarrativeRequest {
    body: NarrativeRequest,
}

impl From<&Flight> for GenerateNarrativeRequest {
    fn from(flight: &Flight) -> Self { Self { body: NarrativeRequest::from(flight) } }
}

impl From<NarrativeRequest> for GenerateNarrativeRequest {
    fn from(body: NarrativeRequest) -> Self { Self { body } }
}

impl JSONBodyHTTPRequestType for GenerateNarrativeRequest {
    type Body = NarrativeRequest;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for GenerateNarrativeRequest {
    type Response = NarrativeResponse;
    fn endpoint(&self) -> &'static str { "/generate-narrative/" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
