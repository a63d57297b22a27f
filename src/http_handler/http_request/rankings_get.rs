use super::rankings::RankingsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Leaderboards are public, no token is sent.
#[derive(Debug)]
pub(crate) struct RankingsRequest {}

impl NoBodyHTTPRequestType for RankingsRequest {}

impl HTTPRequestType for RankingsRequest {
    type Response = RankingsResponse;
    fn endpoint(&self) -> &'static str { "/rankings/" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn requires_auth(&self) -> bool { false }
}
