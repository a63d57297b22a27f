use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// Any status is a valid probe result, the status itself is the payload.
pub(crate) struct ConnectionProbeResponse {}

impl HTTPResponseType for ConnectionProbeResponse {
    type ParsedResponseType = reqwest::StatusCode;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Ok(response.status())
    }
}
