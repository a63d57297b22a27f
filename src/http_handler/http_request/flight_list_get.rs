use super::flight_list::FlightListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /flights/ endpoint, lists the flights of the logged in pilot.
#[derive(Debug)]
pub(crate) struct FlightListRequest {}

impl NoBodyHTTPRequestType for FlightListRequest {}

impl HTTPRequestType for FlightListRequest {
    type Response = FlightListResponse;
    fn endpoint(&self) -> &'static str { "/flights/" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
