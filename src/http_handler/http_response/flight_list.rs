use crate::http_handler::http_handler_common::Flight;
use crate::http_handler::http_response::response_common::{
    HTTPResponseType, JSONBodyHTTPResponseType, ResponseError,
};

/// Response type for GET /flights/, a bare JSON array.
pub(crate) struct FlightListResponse {}

impl JSONBodyHTTPResponseType for FlightListResponse {}

impl HTTPResponseType for FlightListResponse {
    type ParsedResponseType = Vec<Flight>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}
