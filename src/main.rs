#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod cli;
mod config;
mod flights;
mod http_handler;
mod keychain;
mod logger;
mod navigation;
mod rankings;
mod session;
mod showcase;

use crate::cli::{AddFlightArgs, Cli, Command};
use crate::config::{AppConfig, test_api_connection};
use crate::flights::{flight_log, narrative_page::FlightNarrativePage};
use crate::http_handler::{
    http_handler_common::{FlightFormError, NewFlight},
    http_request::{login_post::LoginRequest, register_post::RegisterRequest},
};
use crate::keychain::Keychain;
use crate::navigation::{PageOutcome, Route, render_navbar};
use crate::showcase::{
    carousel::UseCaseCarousel,
    runway::{FLASH_CYCLE_MS, RunwayScene},
};
use clap::Parser;
use std::{error::Error, str::FromStr, time::Duration};
use tokio_util::sync::CancellationToken;

const FRAME_INTERVAL: Duration = Duration::from_millis(100);
const RUNWAY_SIZE: (usize, usize) = (61, 24);

type CommandResult = Result<(), Box<dyn Error>>;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.api_url.clone());
    let keychain = Keychain::new(config).unwrap_or_else(|e| fatal!("Could not build HTTP client: {e}"));
    event!("Using API at {}", keychain.client().url());
    if let Err(e) = run(&keychain, cli.command).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(keychain: &Keychain, command: Command) -> CommandResult {
    match command {
        Command::Home { cycles, period } => home(cycles, Duration::from_secs(period)).await,
        Command::Runway { frames } => runway(frames).await,
        Command::Login { username, password } => {
            let route = session::auth::login(&keychain.client(), &LoginRequest { username, password }).await?;
            follow(keychain, route).await
        }
        Command::Register { username, email, password, confirm } => {
            let password2 = confirm.unwrap_or_else(|| password.clone());
            let request = RegisterRequest { username, email, password, password2 };
            let route = session::auth::register(&keychain.client(), &request).await?;
            follow(keychain, route).await
        }
        Command::Logout => {
            let route = session::auth::logout(keychain.client().jar()).await?;
            follow(keychain, route).await
        }
        Command::Flights => open(keychain, Route::Flights).await,
        Command::Show { id } => {
            show(flight_log::show_flight(&keychain.client(), id).await?, flight_log::render_flight_detail)
        }
        Command::Add(args) => {
            let outcome = flight_log::add_flight(&keychain.client(), flight_form(&args)?).await?;
            show(outcome, flight_log::render_flight_detail)
        }
        Command::Edit { id, flight } => {
            let outcome = flight_log::update_flight(&keychain.client(), id, flight_form(&flight)?).await?;
            show(outcome, flight_log::render_flight_detail)
        }
        Command::Delete { id } => {
            let outcome = flight_log::delete_flight(&keychain.client(), id).await?;
            show(outcome, |_| format!("Flight {id} deleted."))
        }
        Command::Stories => open(keychain, Route::FlightStories).await,
        Command::Rankings => open(keychain, Route::Rankings).await,
        Command::Debug { probe } => debug(keychain, probe).await,
        Command::Open { route } => {
            let route = Route::from_str(&route).map_err(|_| format!("Unknown route {route}"))?;
            open(keychain, route).await
        }
    }
}

/// Prints a rendered page, or where the user should go instead.
fn show<T, F>(outcome: PageOutcome<T>, render: F) -> CommandResult
where F: FnOnce(&T) -> String {
    match outcome {
        PageOutcome::Render(page) => println!("{}", render(&page)),
        PageOutcome::Redirect(route) => redirect_hint(route),
    }
    Ok(())
}

fn redirect_hint(route: Route) {
    match route {
        Route::Login => println!("Please sign in first: airfleet login <username>"),
        Route::Register => println!("Create an account: airfleet register <username> <email>"),
        other => println!("Continue with: airfleet open {other}"),
    }
}

/// Where a session flow lands: the flight list after signing in, the login
/// hint after signing out.
async fn follow(keychain: &Keychain, route: Route) -> CommandResult {
    match route {
        Route::Flights => open(keychain, route).await,
        other => {
            redirect_hint(other);
            Ok(())
        }
    }
}

async fn open(keychain: &Keychain, route: Route) -> CommandResult {
    let client = keychain.client();
    match route {
        Route::Home => home(0, showcase::carousel::ROTATION_PERIOD).await,
        Route::Login | Route::Register => {
            redirect_hint(route);
            Ok(())
        }
        Route::Flights => show(flight_log::list_flights(&client).await?, |flights| {
            format!("{}\n\n{}", render_navbar(), flight_log::render_flight_table(flights))
        }),
        Route::FlightStories => show(FlightNarrativePage::load(&client).await, FlightNarrativePage::render),
        Route::Rankings => {
            let rankings = rankings::fetch_rankings(&client).await?;
            println!("{}\n\n{}", render_navbar(), rankings::render_rankings(&rankings));
            Ok(())
        }
        Route::Debug => debug(keychain, true).await,
    }
}

fn flight_form(args: &AddFlightArgs) -> Result<NewFlight, FlightFormError> {
    let mut form = NewFlight::new(
        &args.departure,
        &args.arrival,
        &args.from,
        &args.to,
        &args.registration,
        &args.condition,
        args.distance,
    )?;
    if let Some(notes) = &args.notes {
        form = form.with_notes(notes);
    }
    if let Some(photo) = &args.photo {
        form = form.with_photo(photo)?;
    }
    Ok(form)
}

async fn debug(keychain: &Keychain, probe: bool) -> CommandResult {
    println!("API Debug Information");
    println!("{}", keychain.config().debug_info().to_pretty_json()?);
    if probe {
        println!("{}", test_api_connection(&keychain.client()).await);
    }
    Ok(())
}

async fn home(cycles: usize, period: Duration) -> CommandResult {
    let mut carousel = UseCaseCarousel::default();
    println!("{}\n", carousel.render());
    if cycles == 0 {
        return Ok(());
    }
    let cancel = CancellationToken::new();
    let stop = cancel.clone();
    let mut shown = 0;
    carousel
        .run(period, cancel, |c| {
            println!("{}\n", c.render());
            shown += 1;
            if shown >= cycles {
                stop.cancel();
            }
        })
        .await;
    Ok(())
}

async fn runway(frames: u32) -> CommandResult {
    let mut scene = RunwayScene::new();
    let mut rng = rand::rng();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let start = tokio::time::Instant::now();
    for _ in 0..frames {
        ticker.tick().await;
        let elapsed = u64::try_from(start.elapsed().as_millis()).unwrap_or(FLASH_CYCLE_MS);
        scene.update(elapsed, &mut rng);
        print!("\x1b[2J\x1b[H{}", scene.render(RUNWAY_SIZE.0, RUNWAY_SIZE.1));
    }
    println!();
    Ok(())
}
