use super::http_response::{
    connection_probe, delete_flight, flight, flight_list, login, narrative, rankings, register,
};

pub mod connection_probe_head;
pub mod flight_delete;
pub mod flight_detail_get;
pub mod flight_list_get;
pub mod flight_post;
pub mod flight_put;
pub mod generate_narrative_post;
pub mod login_post;
pub mod rankings_get;
pub mod register_post;
pub mod request_common;
