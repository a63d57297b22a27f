use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::{Flight, FlightId, HTTPError, NewFlight},
    http_request::{
        flight_delete::DeleteFlightRequest,
        flight_detail_get::FlightDetailRequest,
        flight_list_get::FlightListRequest,
        flight_post::CreateFlightRequest,
        flight_put::UpdateFlightRequest,
        request_common::{MultipartBodyHTTPRequestType, NoBodyHTTPRequestType},
    },
};
use crate::navigation::{PageOutcome, Route};
use crate::{info, warn};
use std::fmt::Write;

/// Maps an authentication failure to a redirect, passes everything else through.
fn guard<T>(result: Result<T, HTTPError>) -> Result<PageOutcome<T>, HTTPError> {
    match result {
        Ok(value) => Ok(PageOutcome::Render(value)),
        Err(err) if err.is_auth_failure() => {
            warn!("Not authenticated ({err}), redirecting to {}", Route::Login);
            Ok(PageOutcome::Redirect(Route::Login))
        }
        Err(err) => Err(err),
    }
}

pub(crate) async fn list_flights(client: &HTTPClient) -> Result<PageOutcome<Vec<Flight>>, HTTPError> {
    guard(FlightListRequest {}.send_request(client).await)
}

pub(crate) async fn show_flight(client: &HTTPClient, id: FlightId) -> Result<PageOutcome<Flight>, HTTPError> {
    guard(FlightDetailRequest::new(id).send_request(client).await)
}

pub(crate) async fn add_flight(client: &HTTPClient, form: NewFlight) -> Result<PageOutcome<Flight>, HTTPError> {
    let outcome = guard(CreateFlightRequest::new(form).send_request(client).await)?;
    if let PageOutcome::Render(flight) = &outcome {
        info!("Logged flight {} ({})", flight.id(), flight.route());
    }
    Ok(outcome)
}

/// Replaces flight `id` with `form`. A form the server rejects surfaces its field errors.
pub(crate) async fn update_flight(
    client: &HTTPClient,
    id: FlightId,
    form: NewFlight,
) -> Result<PageOutcome<Flight>, HTTPError> {
    let outcome = guard(UpdateFlightRequest::new(id, form).send_request(client).await)?;
    if let PageOutcome::Render(flight) = &outcome {
        info!("Updated flight {id} ({})", flight.route());
    }
    Ok(outcome)
}

pub(crate) async fn delete_flight(client: &HTTPClient, id: FlightId) -> Result<PageOutcome<()>, HTTPError> {
    let outcome = guard(DeleteFlightRequest::new(id).send_request(client).await)?;
    if let PageOutcome::Render(()) = outcome {
        info!("Deleted flight {id}");
    }
    Ok(outcome)
}

/// Logbook table, one flight per row.
pub(crate) fn render_flight_table(flights: &[Flight]) -> String {
    if flights.is_empty() {
        return "No flights logged yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<16}  {:<13}  {:>9}  {:>9}  {:<8}  {}",
        "ID", "Date", "Route", "Time", "Dist (nm)", "Reg", "Condition"
    );
    for flight in flights {
        let date = flight
            .departure()
            .map_or_else(|| flight.departure_time().to_string(), |d| d.format("%Y-%m-%d %H:%M").to_string());
        let _ = writeln!(
            out,
            "{:>5}  {:<16}  {:<13}  {:>9}  {:>9.1}  {:<8}  {}",
            flight.id(),
            date,
            flight.route(),
            flight.total_time(),
            flight.distance(),
            flight.registration_number(),
            flight.aircraft_condition()
        );
    }
    let total_distance: f64 = flights.iter().map(Flight::distance).sum();
    let _ = writeln!(out, "\n{} flights, {total_distance:.1} nm total", flights.len());
    out
}

pub(crate) fn render_flight_detail(flight: &Flight) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Flight {}: {}", flight.id(), flight.route());
    let _ = writeln!(out, "  Departure:    {}", flight.departure_time());
    let _ = writeln!(out, "  Arrival:      {}", flight.arrival_time());
    let _ = writeln!(out, "  Total time:   {}", flight.total_time());
    let _ = writeln!(out, "  Distance:     {} nm", flight.distance());
    let _ = writeln!(out, "  Registration: {}", flight.registration_number());
    let _ = writeln!(out, "  Condition:    {}", flight.aircraft_condition());
    if let Some(notes) = flight.notes() {
        let _ = writeln!(out, "  Notes:        {notes}");
    }
    if let Some(photo) = flight.photo() {
        let _ = writeln!(out, "  Photo:        {photo}");
    }
    if let Some(narrative) = flight.stored_narrative() {
        let _ = writeln!(out, "\n  {narrative}");
    }
    out
}
