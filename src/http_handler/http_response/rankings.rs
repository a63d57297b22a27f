use crate::http_handler::http_handler_common::number_or_string;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /rankings/ endpoint, three top ten lists.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct RankingsResponse {
    flights: Vec<FlightCountRank>,
    time: Vec<FlightTimeRank>,
    distance: Vec<DistanceRank>,
}

impl SerdeJSONBodyHTTPResponseType for RankingsResponse {}

impl RankingsResponse {
    pub(crate) fn by_flights(&self) -> &[FlightCountRank] { &self.flights }
    pub(crate) fn by_time(&self) -> &[FlightTimeRank] { &self.time }
    pub(crate) fn by_distance(&self) -> &[DistanceRank] { &self.distance }
}

#[derive(serde::Deserialize, Debug)]
pub(crate) struct FlightCountRank {
    pub(crate) username: String,
    pub(crate) total_flights: u64,
}

#[derive(serde::Deserialize, Debug)]
pub(crate) struct FlightTimeRank {
    pub(crate) username: String,
    /// Duration string, `0:00:00` for pilots without logged time.
    pub(crate) total_time: String,
}

#[derive(serde::Deserialize, Debug)]
pub(crate) struct DistanceRank {
    pub(crate) username: String,
    #[serde(deserialize_with = "number_or_string")]
    pub(crate) total_distance: f64,
}
