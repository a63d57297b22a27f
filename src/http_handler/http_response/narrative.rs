use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /generate-narrative/ endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct NarrativeResponse {
    narrative: String,
}

impl SerdeJSONBodyHTTPResponseType for NarrativeResponse {}

impl NarrativeResponse {
    pub(crate) fn into_narrative(self) -> String { self.narrative }
}
