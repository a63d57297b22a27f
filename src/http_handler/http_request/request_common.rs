use crate::event;
use crate::http_handler::{
    http_client::HTTPClient, http_handler_common::HTTPError,
    http_response::response_common::HTTPResponseType,
};
use strum_macros::Display;

/// Parsed payload a request type resolves to once its response is read.
pub(crate) type ParsedResponse<T> =
    <<T as HTTPRequestType>::Response as HTTPResponseType>::ParsedResponseType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
            HTTPRequestMethod::Head => reqwest::Method::HEAD,
        }
    }
}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Path below the API base, including the trailing slash the backend routes expect.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Whether the bearer token has to be attached.
    fn requires_auth(&self) -> bool { true }
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::default() }

    fn request_url(&self, client: &HTTPClient) -> String {
        format!("{}{}", client.url(), self.endpoint())
    }

    /// Builds the request without a body, attaching headers and credentials.
    ///
    /// Fails with [`RequestError::MissingToken`] before any network traffic
    /// when an authenticated endpoint is called while logged out.
    async fn get_request_base(
        &self,
        client: &HTTPClient,
    ) -> Result<reqwest::RequestBuilder, RequestError> {
        let url = self.request_url(client);
        event!("{:?} {url}", self.request_method());
        let mut builder = client
            .client()
            .request(self.request_method().into(), url)
            .headers(self.header_params());
        if self.requires_auth() {
            let Some(token) = client.access_token().await else {
                return Err(RequestError::MissingToken);
            };
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(&self, client: &HTTPClient) -> Result<ParsedResponse<Self>, HTTPError> {
        let request = self.get_request_base(client).await?;
        let response = request.send().await?;
        event!("{} <- {}", response.status(), self.endpoint());
        Ok(Self::Response::read_response(response).await?)
    }
}

pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(&self, client: &HTTPClient) -> Result<ParsedResponse<Self>, HTTPError> {
        let request = self.get_request_base(client).await?.json(self.body());
        let response = request.send().await?;
        event!("{} <- {}", response.status(), self.endpoint());
        Ok(Self::Response::read_response(response).await?)
    }
}

pub(crate) trait MultipartBodyHTTPRequestType: HTTPRequestType {
    async fn body(&self) -> Result<reqwest::multipart::Form, RequestError>;

    async fn send_request(&self, client: &HTTPClient) -> Result<ParsedResponse<Self>, HTTPError> {
        let base = self.get_request_base(client).await?;
        let request = base.multipart(self.body().await?);
        let response = request.send().await?;
        event!("{} <- {}", response.status(), self.endpoint());
        Ok(Self::Response::read_response(response).await?)
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    /// No access token in the cookie jar.
    MissingToken,
    FileError(std::io::Error),
}

impl std::error::Error for RequestError {}

impl From<std::io::Error> for RequestError {
    fn from(value: std::io::Error) -> Self { RequestError::FileError(value) }
}
