use itertools::Itertools;
use strum_macros::{Display, EnumIter, EnumString};

/// Views of the client, addressed by the same paths the web client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub(crate) enum Route {
    #[strum(serialize = "/")]
    Home,
    #[strum(serialize = "/login")]
    Login,
    #[strum(serialize = "/register")]
    Register,
    #[strum(serialize = "/flights")]
    Flights,
    #[strum(serialize = "/flights/narrative")]
    FlightStories,
    #[strum(serialize = "/rankings")]
    Rankings,
    #[strum(serialize = "/debug")]
    Debug,
}

/// Result of loading a view: either something to show, or somewhere else to go.
#[derive(Debug)]
pub(crate) enum PageOutcome<T> {
    Render(T),
    Redirect(Route),
}

const BRAND: (&str, Route) = ("AirFleet", Route::Flights);
const NAV_LINKS: [(&str, Route); 3] = [
    ("Flights", Route::Flights),
    ("Flight Stories", Route::FlightStories),
    ("Rankings", Route::Rankings),
];
const LOGOUT_LABEL: &str = "Logout";

/// One line navigation bar, brand on the left, links and logout on the right.
pub(crate) fn render_navbar() -> String {
    let links = NAV_LINKS.iter().map(|(label, route)| format!("{label} ({route})")).join("  ");
    format!("{} ({})  |  {links}  |  {LOGOUT_LABEL}", BRAND.0, BRAND.1)
}
