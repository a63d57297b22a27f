pub mod flight_log;
pub mod narrative;
pub mod narrative_page;
