use super::flight::FlightResponse;
use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, MultipartBodyHTTPRequestType, RequestError,
};
use crate::http_handler::http_handler_common::NewFlight;

/// Creates a flight. Sent as `multipart/form-data` so a photo can ride along.
#[derive(Debug)]
pub(crate) struct CreateFlightRequest {
    form: NewFlight,
}

impl CreateFlightRequest {
    pub(crate) fn new(form: NewFlight) -> Self { Self { form } }
}

/// Text fields of `flight` plus the optional `photo` file part.
pub(crate) async fn flight_form(flight: &NewFlight) -> Result<reqwest::multipart::Form, RequestError> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in flight.text_fields() {
        form = form.text(name, value);
    }
    if let Some(path) = flight.photo_path() {
        let file_part = reqwest::multipart::Part::file(path).await?;
        form = form.part("photo", file_part);
    }
    Ok(form)
}

impl MultipartBodyHTTPRequestType for CreateFlightRequest {
    async fn body(&self) -> Result<reqwest::multipart::Form, RequestError> { flight_form(&self.form).await }
}

impl HTTPRequestType for CreateFlightRequest {
    type Response = FlightResponse;
    fn endpoint(&self) -> &'static str { "/flights/" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
