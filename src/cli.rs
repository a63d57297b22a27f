//! Command line surface of the `airfleet` binary.

use crate::config::API_URL_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// airfleet - pilot logbook in the terminal
///
/// Logs flights against an AirFleet backend, shows AI generated flight
/// stories and the community rankings.
#[derive(Debug, Parser)]
#[command(name = "airfleet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Root URL of the AirFleet backend, `/api` is appended
    #[arg(long, global = true, env = API_URL_VAR, value_name = "URL")]
    pub(crate) api_url: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Landing page with the rotating use cases
    Home {
        /// Number of rotations before exiting
        #[arg(long, default_value_t = 4)]
        cycles: usize,
        /// Seconds each use case stays on screen
        #[arg(long, default_value_t = 15)]
        period: u64,
    },
    /// Animated approach lights
    Runway {
        /// Number of frames to draw
        #[arg(long, default_value_t = 100)]
        frames: u32,
    },
    /// Sign in and store the session tokens
    Login {
        username: String,
        #[arg(long, env = "AIRFLEET_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Register {
        username: String,
        email: String,
        #[arg(long, env = "AIRFLEET_PASSWORD", hide_env_values = true)]
        password: String,
        /// Password confirmation, defaults to `--password`
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Forget the stored session tokens
    Logout,
    /// List logged flights
    Flights,
    /// Show a single flight
    Show { id: u64 },
    /// Log a new flight
    Add(AddFlightArgs),
    /// Replace the details of a logged flight
    Edit {
        id: u64,
        #[command(flatten)]
        flight: AddFlightArgs,
    },
    /// Delete a flight
    Delete { id: u64 },
    /// Flights with their generated narratives
    Stories,
    /// Community leaderboards
    Rankings,
    /// Print resolved configuration
    Debug {
        /// Also probe the API
        #[arg(long)]
        probe: bool,
    },
    /// Open a view by its path, e.g. `/flights/narrative`
    Open { route: String },
}

#[derive(Debug, clap::Args)]
pub(crate) struct AddFlightArgs {
    /// Departure time, e.g. 2024-06-01T09:00
    #[arg(long)]
    pub(crate) departure: String,
    /// Arrival time
    #[arg(long)]
    pub(crate) arrival: String,
    /// Departure airport code
    #[arg(long)]
    pub(crate) from: String,
    /// Arrival airport code
    #[arg(long)]
    pub(crate) to: String,
    /// Aircraft registration
    #[arg(long)]
    pub(crate) registration: String,
    #[arg(long, default_value = "Good")]
    pub(crate) condition: String,
    /// Distance in nautical miles
    #[arg(long)]
    pub(crate) distance: f64,
    #[arg(long)]
    pub(crate) notes: Option<String>,
    /// Photo to attach
    #[arg(long, value_name = "FILE")]
    pub(crate) photo: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() { Cli::command().debug_assert(); }

    #[test]
    fn parses_add_with_defaults() {
        let cli = Cli::try_parse_from([
            "airfleet", "add", "--departure", "2024-06-01T09:00", "--arrival", "2024-06-01T10:30",
            "--from", "KBFI", "--to", "KOLM", "--registration", "N739XA", "--distance", "48",
        ])
        .unwrap();
        let Command::Add(args) = cli.command else { panic!("expected add") };
        assert_eq!(args.condition, "Good");
        assert!(args.photo.is_none());
        assert!((args.distance - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn edit_takes_id_and_flight_fields() {
        let cli = Cli::try_parse_from([
            "airfleet", "edit", "42", "--departure", "2024-06-01T09:00", "--arrival", "2024-06-01T10:30",
            "--from", "KBFI", "--to", "KOLM", "--registration", "N739XA", "--distance", "48", "--condition", "Fair",
        ])
        .unwrap();
        let Command::Edit { id, flight } = cli.command else { panic!("expected edit") };
        assert_eq!(id, 42);
        assert_eq!(flight.condition, "Fair");
    }

    #[test]
    fn api_url_is_global() {
        let cli = Cli::try_parse_from(["airfleet", "rankings", "--api-url", "https://fleet.example.org"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("https://fleet.example.org"));
        assert!(matches!(cli.command, Command::Rankings));
    }
}
