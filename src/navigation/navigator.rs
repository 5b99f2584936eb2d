use super::location::Location;
use crate::router::{HiddenParams, RouteId, Router, RouterError};

use std::fmt::Display;
use std::sync::Arc;

/// Builds urls for the routes of a router and navigates to them.
pub struct Navigator<R, L> {
    router: Arc<Router<R>>,
    location: Arc<L>,
}

impl<R, L: Location> Navigator<R, L> {
    pub fn new(router: Arc<Router<R>>, location: Arc<L>) -> Self {
        Self { router, location }
    }

    pub fn router(&self) -> &Arc<Router<R>> {
        &self.router
    }

    pub fn location(&self) -> &Arc<L> {
        &self.location
    }

    /// Navigates to `route` in the current window.
    ///
    /// `hidden` is delivered to the route's render on the match caused by
    /// this navigation.
    pub fn visit<'a, I, V>(
        &self,
        route: RouteId,
        params: I,
        hidden: Option<HiddenParams>,
    ) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Display,
    {
        let url = self.build(route, params)?;
        self.router.set_hidden_params(route, hidden);
        self.location.set_hash(&format!("/{}", url));
        Ok(())
    }

    /// Opens `route` in a new window. Hidden parameters can not cross windows.
    pub fn open<'a, I, V>(&self, route: RouteId, params: I) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Display,
    {
        let url = self.build(route, params)?;
        self.open_url(&url);
        Ok(())
    }

    /// A link to `route`: primary click visits, auxiliary click opens.
    pub fn link<'a, I, V>(&self, route: RouteId, params: I) -> Result<Link<R, L>, RouterError>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Display,
    {
        let url = self.build(route, params)?;
        Ok(Link {
            navigator: self.clone(),
            route,
            url,
        })
    }

    fn build<'a, I, V>(&self, route: RouteId, params: I) -> Result<String, RouterError>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Display,
    {
        let route = self.router.route(route).ok_or(RouterError::ForeignRoute)?;
        route.build(params)
    }

    fn open_url(&self, url: &str) {
        let target = format!("{}/#/{}", self.location.origin(), url);
        self.location.open_window(&target);
    }
}

impl<R, L> Clone for Navigator<R, L> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
            location: Arc::clone(&self.location),
        }
    }
}

pub struct Link<R, L> {
    navigator: Navigator<R, L>,
    route: RouteId,
    url: String,
}

impl<R, L: Location> Link<R, L> {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn route(&self) -> RouteId {
        self.route
    }

    pub fn click(&self) {
        self.navigator.router.set_hidden_params(self.route, None);
        self.navigator.location.set_hash(&format!("/{}", self.url));
    }

    pub fn aux_click(&self) {
        self.navigator.open_url(&self.url);
    }
}
