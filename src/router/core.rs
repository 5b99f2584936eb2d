use super::params::{HiddenParams, Params};
use super::route::Route;
use super::Router;

/// The outcome of a successful [`Router::match_segments`].
#[derive(Debug)]
pub struct Match<'r, R> {
    pub route: &'r Route<R>,
    pub params: Params,
    pub hidden: Option<HiddenParams>,
}

impl<'r, R> Match<'r, R> {
    pub fn render(self) -> R {
        self.route.render(&self.params, self.hidden)
    }
}

impl<R> Router<R> {
    /// Matches an url which has already been split at `/`.
    ///
    /// Routes are tried in registration order. A pending hidden parameter set
    /// is consumed by the first successful match: it is attached when the
    /// match is its target and dropped otherwise. When nothing matches it
    /// stays pending.
    pub fn match_segments<'r>(&'r self, segments: &[&str]) -> Option<Match<'r, R>> {
        // TODO: index the routes by segment count and literal prefix in `finish`
        let found = self
            .routes
            .iter()
            .find_map(|route| route.match_segments(segments).map(|p| (route, p)));

        let (route, params) = match found {
            Some(found) => found,
            None => {
                tracing::debug!(?segments, "no route matched");
                return None;
            }
        };

        let hidden = match self.hidden.lock().take() {
            Some(slot) if slot.route == route.id() => Some(slot.params),
            Some(slot) => {
                tracing::debug!(target_route = ?slot.route, "hidden params dropped");
                None
            }
            None => None,
        };

        tracing::debug!(url = %route.url(), hidden = hidden.is_some(), "route matched");
        Some(Match {
            route,
            params,
            hidden,
        })
    }

    /// Matches `segments` and renders the matched route.
    pub fn match_and_render(&self, segments: &[&str]) -> Option<R> {
        self.match_segments(segments).map(Match::render)
    }
}
