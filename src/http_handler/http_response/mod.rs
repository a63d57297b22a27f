pub mod response_common;
pub mod connection_probe;
pub mod delete_flight;
pub mod flight;
pub mod flight_list;
pub mod login;
pub mod narrative;
pub mod rankings;
pub mod register;
