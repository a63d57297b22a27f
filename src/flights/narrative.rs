use crate::http_handler::{
    http_client::HTTPClient,
    http_handler_common::{Flight, FlightId, HTTPError, NarrativeRequest},
    http_request::{
        generate_narrative_post::GenerateNarrativeRequest, request_common::JSONBodyHTTPRequestType,
    },
};
use crate::{error, event};
use futures::StreamExt;
use std::collections::HashMap;

/// Stored for a flight whose narrative could not be generated.
pub(crate) const NARRATIVE_FALLBACK: &str = "Failed to generate narrative. Please try again later.";

/// Narrative text per flight id.
pub(crate) type NarrativeMap = HashMap<FlightId, String>;

/// Something that can turn flight attributes into a narrative.
pub(crate) trait NarrativeSource {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, HTTPError>;
}

impl NarrativeSource for HTTPClient {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, HTTPError> {
        let response = GenerateNarrativeRequest::from(request.clone()).send_request(self).await?;
        Ok(response.into_narrative())
    }
}

async fn narrative_for<S: NarrativeSource>(source: &S, flight: &Flight) -> (FlightId, String) {
    if let Some(stored) = flight.stored_narrative() {
        return (flight.id(), stored.to_string());
    }
    event!("Generating narrative for flight {}", flight.id());
    match source.generate(&NarrativeRequest::from(flight)).await {
        Ok(narrative) => (flight.id(), narrative),
        Err(err) => {
            error!("Error generating narrative for flight {}: {err}", flight.id());
            (flight.id(), NARRATIVE_FALLBACK.to_string())
        }
    }
}

/// Fills in a narrative for every flight.
///
/// Flights are handled strictly in list order with at most one request in
/// flight. A failure only affects its own flight, which gets
/// [`NARRATIVE_FALLBACK`].
pub(crate) async fn generate_narratives<S: NarrativeSource>(source: &S, flights: &[Flight]) -> NarrativeMap {
    futures::stream::iter(flights)
        .then(|flight| narrative_for(source, flight))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_handler::http_response::response_common::{ErrorDetail, ResponseError};
    use std::sync::Mutex;

    /// Answers from a script and records the order of calls.
    struct ScriptedSource {
        failing: Vec<FlightId>,
        calls: Mutex<Vec<FlightId>>,
    }

    impl ScriptedSource {
        fn failing(ids: &[FlightId]) -> Self {
            Self { failing: ids.to_vec(), calls: Mutex::new(Vec::new()) }
        }
    }

    impl NarrativeSource for ScriptedSource {
        async fn generate(&self, request: &NarrativeRequest) -> Result<String, HTTPError> {
            self.calls.lock().unwrap().push(request.flight_id);
            tokio::task::yield_now().await;
            if self.failing.contains(&request.flight_id) {
                Err(ResponseError::InternalServer(ErrorDetail::from_body(r#"{"error": "quota"}"#)).into())
            } else {
                Ok(format!("{} to {}", request.departure_airport, request.arrival_airport))
            }
        }
    }

    fn flights() -> Vec<Flight> {
        vec![
            Flight::sample(1, "KSEA", "KPDX"),
            Flight::sample(2, "KPDX", "KSFO"),
            Flight::sample(3, "KSFO", "KLAX"),
        ]
    }

    #[tokio::test]
    async fn one_failure_does_not_affect_other_flights() {
        let source = ScriptedSource::failing(&[2]);
        let narratives = generate_narratives(&source, &flights()).await;

        assert_eq!(narratives.len(), 3);
        assert_eq!(narratives[&1], "KSEA to KPDX");
        assert_eq!(narratives[&2], NARRATIVE_FALLBACK);
        assert_eq!(narratives[&3], "KSFO to KLAX");
    }

    #[tokio::test]
    async fn requests_follow_list_order() {
        let source = ScriptedSource::failing(&[]);
        let mut list = flights();
        list.reverse();
        generate_narratives(&source, &list).await;
        assert_eq!(*source.calls.lock().unwrap(), vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn stored_narratives_skip_generation() {
        let source = ScriptedSource::failing(&[1]);
        let list = vec![
            Flight::sample(1, "KSEA", "KPDX").with_narrative("Already written."),
            Flight::sample(2, "KPDX", "KSFO"),
        ];
        let narratives = generate_narratives(&source, &list).await;
        assert_eq!(narratives[&1], "Already written.");
        assert_eq!(*source.calls.lock().unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn every_flight_failing_yields_fallback_for_all() {
        let source = ScriptedSource::failing(&[1, 2, 3]);
        let narratives = generate_narratives(&source, &flights()).await;
        assert!(narratives.values().all(|n| n == NARRATIVE_FALLBACK));
    }
}
