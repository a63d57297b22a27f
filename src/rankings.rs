use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::HTTPError,
    http_request::{rankings_get::RankingsRequest, request_common::NoBodyHTTPRequestType},
    http_response::rankings::RankingsResponse,
};
use std::fmt::Write;

pub(crate) async fn fetch_rankings(client: &HTTPClient) -> Result<RankingsResponse, HTTPError> {
    RankingsRequest {}.send_request(client).await
}

fn leaderboard<I>(out: &mut String, title: &str, rows: I)
where I: ExactSizeIterator<Item = (String, String)> {
    let _ = writeln!(out, "{title}");
    if rows.len() == 0 {
        let _ = writeln!(out, "  no pilots yet");
    }
    for (place, (name, value)) in rows.enumerate() {
        let _ = writeln!(out, "  {:>2}. {name:<20} {value:>12}", place + 1);
    }
    out.push('\n');
}

pub(crate) fn render_rankings(rankings: &RankingsResponse) -> String {
    let mut out = String::new();
    leaderboard(
        &mut out,
        "Most flights",
        rankings.by_flights().iter().map(|r| (r.username.clone(), r.total_flights.to_string())),
    );
    leaderboard(
        &mut out,
        "Most time aloft",
        rankings.by_time().iter().map(|r| (r.username.clone(), r.total_time.clone())),
    );
    leaderboard(
        &mut out,
        "Longest distance",
        rankings.by_distance().iter().map(|r| (r.username.clone(), format!("{:.1} nm", r.total_distance))),
    );
    out
}
