use super::narrative::{NarrativeMap, NarrativeSource, generate_narratives};
use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::{Flight, HTTPError},
    http_request::{flight_list_get::FlightListRequest, request_common::NoBodyHTTPRequestType},
};
use crate::navigation::{PageOutcome, Route, render_navbar};
use crate::{error, warn};
use chrono::Local;
use std::fmt::Write;

pub(crate) const FETCH_FAILED: &str = "Failed to fetch flights";
/// Shown for a flight whose narrative is not known yet.
pub(crate) const NARRATIVE_PENDING: &str = "Generating narrative...";

/// The "Flight Stories" view: every flight with its narrative.
#[derive(Debug, Default)]
pub(crate) struct FlightNarrativePage {
    flights: Vec<Flight>,
    narratives: NarrativeMap,
    error: Option<String>,
}

impl FlightNarrativePage {
    /// Fetches the flight list and generates the narratives against the backend.
    pub(crate) async fn load(client: &HTTPClient) -> PageOutcome<Self> {
        Self::load_with(client, client).await
    }

    /// Like [`Self::load`], but with narratives coming from `source`.
    ///
    /// A missing token or a 401 redirects to the login view. Other failures
    /// render the page with an inline error and no flights.
    pub(crate) async fn load_with<S: NarrativeSource>(client: &HTTPClient, source: &S) -> PageOutcome<Self> {
        let listed = FlightListRequest {}.send_request(client).await;
        let flights = match listed {
            Ok(flights) => flights,
            Err(err) if err.is_auth_failure() => {
                warn!("Not authenticated ({err}), redirecting to {}", Route::Login);
                return PageOutcome::Redirect(Route::Login);
            }
            Err(err) => return PageOutcome::Render(Self::failed(&err)),
        };
        let narratives = generate_narratives(source, &flights).await;
        PageOutcome::Render(Self { flights, narratives, error: None })
    }

    fn failed(err: &HTTPError) -> Self {
        error!("Error fetching flights: {err}");
        Self { error: Some(FETCH_FAILED.to_string()), ..Self::default() }
    }

    pub(crate) fn flights(&self) -> &[Flight] { &self.flights }
    pub(crate) fn error(&self) -> Option<&str> { self.error.as_deref() }

    /// The narrative for `flight`, or the pending placeholder.
    pub(crate) fn narrative(&self, flight: &Flight) -> &str {
        self.narratives
            .get(&flight.id())
            .map(String::as_str)
            .filter(|n| !n.is_empty())
            .unwrap_or(NARRATIVE_PENDING)
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", render_navbar());
        let _ = writeln!(out, "Flight Narratives\n");
        if let Some(err) = &self.error {
            let _ = writeln!(out, "{err}\n");
        }
        for flight in &self.flights {
            let departure = flight.departure().map(|d| d.with_timezone(&Local));
            let arrival = flight.arrival().map(|d| d.with_timezone(&Local));
            let date = departure.map_or_else(|| flight.departure_time().to_string(), |d| d.format("%Y-%m-%d").to_string());
            let _ = writeln!(out, "{}    {date}", flight.route());
            let _ = writeln!(
                out,
                "  Departure: {:<10} Duration: {}",
                departure.map_or_else(|| flight.departure_time().to_string(), |d| d.format("%H:%M").to_string()),
                flight.total_time()
            );
            let _ = writeln!(
                out,
                "  Arrival:   {:<10} Distance: {} nm",
                arrival.map_or_else(|| flight.arrival_time().to_string(), |d| d.format("%H:%M").to_string()),
                flight.distance()
            );
            let _ = writeln!(out, "  Flight Story");
            let _ = writeln!(out, "  {}\n", self.narrative(flight));
        }
        out
    }
}
