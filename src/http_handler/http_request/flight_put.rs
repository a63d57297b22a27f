use super::flight::FlightResponse;
use super::flight_post::flight_form;
use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, MultipartBodyHTTPRequestType, RequestError,
};
use crate::http_handler::http_handler_common::{FlightId, NewFlight};

/// Replaces every editable field of an existing flight.
#[derive(Debug)]
pub(crate) struct UpdateFlightRequest {
    path: String,
    form: NewFlight,
}

impl UpdateFlightRequest {
    pub(crate) fn new(id: FlightId, form: NewFlight) -> Self {
        Self { path: format!("/flights/{id}/"), form }
    }
}

impl MultipartBodyHTTPRequestType for UpdateFlightRequest {
    async fn body(&self) -> Result<reqwest::multipart::Form, RequestError> { flight_form(&self.form).await }
}

impl HTTPRequestType for UpdateFlightRequest {
    type Response = FlightResponse;
    fn endpoint(&self) -> &str { &self.path }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
