mod core;
mod error;
mod imp;
mod params;
mod parser;
mod pattern;
mod render;
mod route;

pub use self::core::Match;
pub use self::error::{BoxError, ConfigError, ParseError, RouterError};
pub use self::params::{HiddenParams, Params};
pub use self::parser::Parsers;
pub use self::pattern::{Pattern, Token};
pub use self::render::{BoxRender, Render};
pub use self::route::{Route, RouteConfig, RouteId};

use parking_lot::Mutex;

/// An ordered set of routes. The first registered route that matches wins.
pub struct Router<R> {
    id: u64,
    routes: Vec<Route<R>>,
    hidden: Mutex<Option<HiddenSlot>>,
    finished: bool,
}

/// Hidden parameters waiting for the next match of `route`.
#[derive(Debug)]
struct HiddenSlot {
    route: RouteId,
    params: HiddenParams,
}
