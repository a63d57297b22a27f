use crate::http_handler::http_handler_common::Flight;
use crate::http_handler::http_response::response_common::{
    HTTPResponseType, JSONBodyHTTPResponseType, ResponseError,
};

/// A single flight, returned when fetching by id and after creation.
pub(crate) struct FlightResponse {}

impl JSONBodyHTTPResponseType for FlightResponse {}

impl HTTPResponseType for FlightResponse {
    type ParsedResponseType = Flight;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}
