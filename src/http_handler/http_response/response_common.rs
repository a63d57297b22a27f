use strum_macros::Display;

/// Shown when an error response carries no usable JSON body.
pub(crate) const UNPARSABLE_ERROR_BODY: &str = "Unknown error occurred, could not parse response";

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == reqwest::StatusCode::UNAUTHORIZED {
            Err(ResponseError::Unauthorized(ErrorDetail::read(response).await))
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ResponseError::NotFound)
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(ErrorDetail::read(response).await))
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer(ErrorDetail::read(response).await))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Message extracted from a non-2xx response body.
///
/// The backend is not consistent about the key: login failures use `error`,
/// authentication middleware uses `detail`, flight validation uses `message`
/// next to an `errors` map. Serializer errors have none of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    message: Option<String>,
    raw: String,
}

impl ErrorDetail {
    async fn read(response: reqwest::Response) -> Self {
        match response.text().await {
            Ok(text) => Self::from_body(&text),
            Err(_) => Self::unparsable(),
        }
    }

    pub(crate) fn from_body(text: &str) -> Self {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
            return Self::unparsable();
        };
        let message = ["error", "detail", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
            .map(String::from);
        Self { message, raw: value.to_string() }
    }

    fn unparsable() -> Self { Self { message: None, raw: UNPARSABLE_ERROR_BODY.to_string() } }

    /// The server's human readable message, if it sent one under a known key.
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }

    /// The message, or the whole JSON body when there is none.
    pub fn describe(&self) -> &str { self.message.as_deref().unwrap_or(&self.raw) }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    Unauthorized(ErrorDetail),
    BadRequest(ErrorDetail),
    NotFound,
    InternalServer(ErrorDetail),
    NoConnection,
    Timeout,
    Parse,
    Unknown,
}

impl ResponseError {
    /// Server supplied message, if the response carried one.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            ResponseError::Unauthorized(detail)
            | ResponseError::BadRequest(detail)
            | ResponseError::InternalServer(detail) => Some(detail),
            _ => None,
        }
    }
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::Parse
        } else if value.is_request() || value.is_builder() {
            ResponseError::BadRequest(ErrorDetail::unparsable())
        } else {
            ResponseError::Unknown
        }
    }
}
