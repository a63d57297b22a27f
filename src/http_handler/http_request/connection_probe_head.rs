use super::connection_probe::ConnectionProbeResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// `HEAD /register/`, used by the debug view to check that the API is reachable.
#[derive(Debug)]
pub(crate) struct ConnectionProbeRequest {}

impl NoBodyHTTPRequestType for ConnectionProbeRequest {}

impl HTTPRequestType for ConnectionProbeRequest {
    type Response = ConnectionProbeResponse;
    fn endpoint(&self) -> &'static str { "/register/" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Head }
    fn requires_auth(&self) -> bool { false }
}
