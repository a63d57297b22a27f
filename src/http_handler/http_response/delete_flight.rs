use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// 204 No Content on success.
pub(crate) struct DeleteFlightResponse {}

impl HTTPResponseType for DeleteFlightResponse {
    type ParsedResponseType = ();

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(response).await?;
        Ok(())
    }
}
