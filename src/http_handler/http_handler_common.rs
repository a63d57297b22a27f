use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use std::{io, path::Path};
use strum_macros::Display;

/// Server side primary key of a flight.
pub type FlightId = u64;

/// A logged flight as returned by `GET /flights/`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Flight {
    id: FlightId,
    departure_time: String,
    arrival_time: String,
    total_time: String,
    departure_airport: String,
    arrival_airport: String,
    registration_number: String,
    aircraft_condition: String,
    #[serde(deserialize_with = "number_or_string")]
    distance: f64,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    generated_narrative: Option<String>,
    #[serde(default)]
    photo: Option<String>,
}

impl Flight {
    pub fn id(&self) -> FlightId { self.id }
    pub fn departure_time(&self) -> &str { &self.departure_time }
    pub fn arrival_time(&self) -> &str { &self.arrival_time }
    pub fn total_time(&self) -> &str { &self.total_time }
    pub fn departure_airport(&self) -> &str { &self.departure_airport }
    pub fn arrival_airport(&self) -> &str { &self.arrival_airport }
    pub fn registration_number(&self) -> &str { &self.registration_number }
    pub fn aircraft_condition(&self) -> &str { &self.aircraft_condition }
    pub fn distance(&self) -> f64 { self.distance }
    pub fn notes(&self) -> Option<&str> { self.notes.as_deref() }
    pub fn photo(&self) -> Option<&str> { self.photo.as_deref() }

    /// The narrative persisted with the flight, blank strings count as absent.
    pub fn stored_narrative(&self) -> Option<&str> {
        self.generated_narrative.as_deref().filter(|n| !n.trim().is_empty())
    }

    pub fn departure(&self) -> Option<DateTime<FixedOffset>> { parse_timestamp(&self.departure_time) }
    pub fn arrival(&self) -> Option<DateTime<FixedOffset>> { parse_timestamp(&self.arrival_time) }

    pub fn route(&self) -> String {
        format!("{} → {}", self.departure_airport, self.arrival_airport)
    }
}

#[cfg(test)]
impl Flight {
    pub fn sample(id: FlightId, from: &str, to: &str) -> Self {
        Self {
            id,
            departure_time: "2024-05-01T08:30:00Z".to_string(),
            arrival_time: "2024-05-01T10:00:00Z".to_string(),
            total_time: "01:30:00".to_string(),
            departure_airport: from.to_string(),
            arrival_airport: to.to_string(),
            registration_number: "N172SP".to_string(),
            aircraft_condition: "Good".to_string(),
            distance: 182.0,
            notes: None,
            generated_narrative: None,
            photo: None,
        }
    }

    pub fn with_narrative(mut self, narrative: &str) -> Self {
        self.generated_narrative = Some(narrative.to_string());
        self
    }
}

/// Accepts `182.5` as well as the `"182.50"` a decimal field serializes to.
pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where D: serde::Deserializer<'de> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    match <Raw as serde::Deserialize>::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Parses RFC 3339 timestamps, naive ones are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    const NAIVE_FORMATS: [&str; 4] =
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// Formats a duration the way the backend's duration field expects it, `HH:MM:SS`.
pub fn format_duration(duration: TimeDelta) -> String {
    let secs = duration.num_seconds();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[derive(Debug, Display)]
pub enum FlightFormError {
    InvalidTimestamp(String),
    ArrivalBeforeDeparture,
    InvalidAirport(String),
    InvalidDistance,
    Photo(io::Error),
}

impl std::error::Error for FlightFormError {}

/// The create form sent as multipart to `POST /flights/`.
#[derive(Debug, Clone)]
pub struct NewFlight {
    departure_time: DateTime<FixedOffset>,
    arrival_time: DateTime<FixedOffset>,
    departure_airport: String,
    arrival_airport: String,
    registration_number: String,
    aircraft_condition: String,
    distance: f64,
    notes: Option<String>,
    photo_path: Option<String>,
}

impl NewFlight {
    pub fn new(
        departure_time: &str,
        arrival_time: &str,
        departure_airport: &str,
        arrival_airport: &str,
        registration_number: &str,
        aircraft_condition: &str,
        distance: f64,
    ) -> Result<Self, FlightFormError> {
        let dep = parse_timestamp(departure_time)
            .ok_or_else(|| FlightFormError::InvalidTimestamp(departure_time.to_string()))?;
        let arr = parse_timestamp(arrival_time)
            .ok_or_else(|| FlightFormError::InvalidTimestamp(arrival_time.to_string()))?;
        if arr <= dep {
            return Err(FlightFormError::ArrivalBeforeDeparture);
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(FlightFormError::InvalidDistance);
        }
        Ok(Self {
            departure_time: dep,
            arrival_time: arr,
            departure_airport: airport_code(departure_airport)?,
            arrival_airport: airport_code(arrival_airport)?,
            registration_number: registration_number.trim().to_uppercase(),
            aircraft_condition: aircraft_condition.trim().to_string(),
            distance,
            notes: None,
            photo_path: None,
        })
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string()).filter(|n| !n.trim().is_empty());
        self
    }

    pub fn with_photo<P: AsRef<Path>>(mut self, photo: P) -> Result<Self, FlightFormError> {
        let path = photo.as_ref();
        if !path.exists() {
            return Err(FlightFormError::Photo(io::Error::new(
                io::ErrorKind::NotFound,
                "File path does not exist",
            )));
        }
        if !path.is_file() {
            return Err(FlightFormError::Photo(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Path is not a valid file",
            )));
        }
        self.photo_path = Some(path.to_string_lossy().to_string());
        Ok(self)
    }

    pub fn total_time(&self) -> String { format_duration(self.arrival_time - self.departure_time) }

    pub fn photo_path(&self) -> Option<&str> { self.photo_path.as_deref() }

    /// Text fields of the form in submission order.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("departure_time", self.departure_time.to_rfc3339()),
            ("arrival_time", self.arrival_time.to_rfc3339()),
            ("total_time", self.total_time()),
            ("departure_airport", self.departure_airport.clone()),
            ("arrival_airport", self.arrival_airport.clone()),
            ("registration_number", self.registration_number.clone()),
            ("aircraft_condition", self.aircraft_condition.clone()),
            ("distance", self.distance.to_string()),
        ];
        if let Some(notes) = &self.notes {
            fields.push(("notes", notes.clone()));
        }
        fields
    }
}

fn airport_code(raw: &str) -> Result<String, FlightFormError> {
    let code = raw.trim().to_uppercase();
    if (3..=4).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(code)
    } else {
        Err(FlightFormError::InvalidAirport(raw.to_string()))
    }
}

/// Body of `POST /generate-narrative/`.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct NarrativeRequest {
    pub flight_id: FlightId,
    pub departure_time: String,
    pub arrival_time: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub total_time: String,
    pub aircraft_condition: String,
    pub distance: f64,
    pub registration_number: String,
}

impl From<&Flight> for NarrativeRequest {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_id: flight.id,
            departure_time: flight.departure_time.clone(),
            arrival_time: flight.arrival_time.clone(),
            departure_airport: flight.departure_airport.clone(),
            arrival_airport: flight.arrival_airport.clone(),
            total_time: flight.total_time.clone(),
            aircraft_condition: flight.aircraft_condition.clone(),
            distance: flight.distance,
            registration_number: flight.registration_number.clone(),
        }
    }
}

#[derive(Debug)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::fmt::Display for HTTPError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HTTPError::HTTPRequestError(err) => write!(f, "{err}"),
            HTTPError::HTTPResponseError(err) => match err.detail() {
                Some(detail) => write!(f, "{err}: {}", detail.describe()),
                None => write!(f, "{err}"),
            },
        }
    }
}

impl HTTPError {
    /// True for failures that should send the user back to the login view.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            HTTPError::HTTPRequestError(RequestError::MissingToken)
                | HTTPError::HTTPResponseError(ResponseError::Unauthorized(_))
        )
    }
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

impl From<reqwest::Error> for HTTPError {
    fn from(value: reqwest::Error) -> Self { HTTPError::HTTPResponseError(value.into()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_decodes_decimal_strings_and_missing_options() {
        let json = r#"{
            "id": 7, "departure_time": "2024-05-01T08:30:00Z", "arrival_time": "2024-05-01T10:00:00Z",
            "total_time": "01:30:00", "departure_airport": "KSEA", "arrival_airport": "KPDX",
            "registration_number": "N12345", "aircraft_condition": "Good", "distance": "129.50"
        }"#;
        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.id(), 7);
        assert!((flight.distance() - 129.5).abs() < f64::EPSILON);
        assert_eq!(flight.stored_narrative(), None);
        assert_eq!(flight.route(), "KSEA → KPDX");
    }

    #[test]
    fn blank_stored_narrative_is_absent() {
        let flight = Flight::sample(1, "KSEA", "KPDX").with_narrative("  ");
        assert_eq!(flight.stored_narrative(), None);
        let flight = Flight::sample(1, "KSEA", "KPDX").with_narrative("Smooth ride.");
        assert_eq!(flight.stored_narrative(), Some("Smooth ride."));
    }

    #[test]
    fn timestamps_accept_naive_input() {
        let ts = parse_timestamp("2024-05-01T08:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T08:30:00+00:00");
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn new_flight_computes_total_time() {
        let form = NewFlight::new(
            "2024-05-01T08:30",
            "2024-05-01T10:05:30",
            "ksea",
            "KPDX",
            "n172sp",
            "Good",
            129.0,
        )
        .unwrap()
        .with_notes("Gusty crosswind");
        assert_eq!(form.total_time(), "01:35:30");
        let fields = form.text_fields();
        assert!(fields.contains(&("departure_airport", "KSEA".to_string())));
        assert!(fields.contains(&("registration_number", "N172SP".to_string())));
        assert!(fields.contains(&("notes", "Gusty crosswind".to_string())));
    }

    #[test]
    fn new_flight_rejects_bad_input() {
        let reversed = NewFlight::new("2024-05-01T10:00", "2024-05-01T08:00", "KSEA", "KPDX", "N1", "Good", 1.0);
        assert!(matches!(reversed, Err(FlightFormError::ArrivalBeforeDeparture)));
        let airport = NewFlight::new("2024-05-01T08:00", "2024-05-01T10:00", "Seattle", "KPDX", "N1", "Good", 1.0);
        assert!(matches!(airport, Err(FlightFormError::InvalidAirport(_))));
        let distance = NewFlight::new("2024-05-01T08:00", "2024-05-01T10:00", "KSEA", "KPDX", "N1", "Good", -3.0);
        assert!(matches!(distance, Err(FlightFormError::InvalidDistance)));
    }

    #[test]
    fn missing_photo_is_rejected() {
        let form = NewFlight::new("2024-05-01T08:00", "2024-05-01T10:00", "KSEA", "KPDX", "N1", "Good", 1.0).unwrap();
        assert!(matches!(form.with_photo("/definitely/not/here.jpg"), Err(FlightFormError::Photo(_))));
    }

    #[test]
    fn narrative_request_carries_flight_attributes() {
        let flight = Flight::sample(3, "KBFI", "KOLM");
        let req = NarrativeRequest::from(&flight);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["flight_id"], 3);
        assert_eq!(json["departure_airport"], "KBFI");
        assert_eq!(json["registration_number"], "N172SP");
    }
}
