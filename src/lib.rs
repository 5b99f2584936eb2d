//! A client-side hash router.
//!
//! Routes are url templates where `{name}` binds a whole segment to a typed
//! parameter. Matching takes an url already split at `/` and returns the first
//! registered route whose literals and parsers accept it.
//!
//! ```
//! use hash_router::{parsers, RouteConfig, Router};
//!
//! let mut router: Router<String> = Router::new();
//! router.add(RouteConfig::new(
//!     "user/{id}",
//!     parsers! { "id": u32 },
//!     |params, _| format!("user {}", params.get::<u32>("id").unwrap()),
//! ));
//! router.finish();
//!
//! assert_eq!(router.match_and_render(&["user", "7"]).unwrap(), "user 7");
//! assert!(router.match_and_render(&["user", "x"]).is_none());
//! ```
#![forbid(unsafe_code)]

mod router;

pub use self::router::{
    BoxError, BoxRender, ConfigError, HiddenParams, Match, Params, ParseError, Parsers, Pattern,
    Render, Route, RouteConfig, RouteId, Router, RouterError, Token,
};

#[cfg(feature = "navigation")]
pub mod navigation;
