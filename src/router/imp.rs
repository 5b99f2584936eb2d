use super::params::HiddenParams;
use super::route::{Route, RouteConfig, RouteId};
use super::{HiddenSlot, Router};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

static NEXT_ROUTER_ID: AtomicU64 = AtomicU64::new(0);

impl<R> Router<R> {
    pub fn new() -> Self {
        Self {
            id: NEXT_ROUTER_ID.fetch_add(1, Ordering::Relaxed),
            routes: Vec::new(),
            hidden: Mutex::new(None),
            finished: false,
        }
    }

    /// Compiles `config` into a new route at the end of the list.
    ///
    /// Registration never fails. Problems with the url or the parser table
    /// are kept in [`Route::errors`] and reported by [`finish`](Self::finish).
    pub fn add(&mut self, config: RouteConfig<R>) -> RouteId {
        if self.finished {
            tracing::warn!(url = %config.url, "route added after the router was finished");
        }
        let id = RouteId {
            router: self.id,
            index: self.routes.len(),
        };
        self.routes.push(Route::new(id, config));
        id
    }

    /// Reports the configuration errors of every route.
    ///
    /// Returns the number of misconfigured routes. Matching is not affected.
    pub fn finish(&mut self) -> usize {
        self.finished = true;

        let mut misconfigured = 0;
        for route in self.routes.iter().filter(|r| !r.errors().is_empty()) {
            misconfigured += 1;
            let errors: Vec<String> = route.errors().iter().map(ToString::to_string).collect();
            tracing::error!(url = %route.url(), ?errors, "errors in route");
        }
        misconfigured
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `None` if the route belongs to another router.
    pub fn route(&self, id: RouteId) -> Option<&Route<R>> {
        if id.router != self.id {
            return None;
        }
        self.routes.get(id.index)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<R>> + '_ {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Passes `params` to the render of the next match, if that match is `route`.
    ///
    /// Whatever the next match is, the parameters are gone after it. Setting
    /// new parameters replaces pending ones; `None` clears them.
    pub fn set_hidden_params(&self, route: RouteId, params: Option<HiddenParams>) {
        if self.route(route).is_none() {
            tracing::error!(?route, "routes are misconfigured: route belongs to another router");
            return;
        }
        let mut slot = self.hidden.lock();
        *slot = params.map(|params| HiddenSlot { route, params });
        tracing::debug!(?route, armed = slot.is_some(), "hidden params set");
    }

    pub fn has_hidden_params(&self) -> bool {
        self.hidden.lock().is_some()
    }
}

impl<R> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("id", &self.id)
            .field("routes", &self.routes)
            .field("hidden", &*self.hidden.lock())
            .field("finished", &self.finished)
            .finish()
    }
}
