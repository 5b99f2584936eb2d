use super::error::{ConfigError, RouterError};
use super::params::{HiddenParams, Params};
use super::parser::Parsers;
use super::pattern::{Pattern, Token};
use super::render::{BoxRender, Render};

use std::fmt::{self, Display};

use smallvec::SmallVec;

/// Identifies a route and the router it is registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId {
    pub(super) router: u64,
    pub(super) index: usize,
}

impl RouteId {
    /// Registration index inside the owning router.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// What [`Router::add`](super::Router::add) registers: an url template, a
/// parser per bound name and the render of the route.
pub struct RouteConfig<R> {
    pub url: String,
    pub parsers: Parsers,
    pub render: BoxRender<R>,
}

impl<R> RouteConfig<R> {
    pub fn new<F>(url: impl Into<String>, parsers: Parsers, render: F) -> Self
    where
        F: Fn(&Params, Option<HiddenParams>) -> R + Send + Sync + 'static,
    {
        Self {
            url: url.into(),
            parsers,
            render: Box::new(render),
        }
    }
}

pub struct Route<R> {
    id: RouteId,
    url: Box<str>,
    pattern: Pattern,
    parsers: Parsers,
    render: BoxRender<R>,
    errors: Vec<ConfigError>,
}

impl<R> Route<R> {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Configuration errors found when the route was registered.
    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    /// Matches an url which has already been split at `/`.
    ///
    /// The segment count must equal the pattern length. A bound segment whose
    /// parser returns `Err`, or which has no parser, fails the whole match.
    pub fn match_segments(&self, segments: &[&str]) -> Option<Params> {
        if segments.len() != self.pattern.len() {
            return None;
        }

        let mut params = Params::new();
        for (token, &input) in self.pattern.tokens().iter().zip(segments) {
            match token {
                Token::Literal(lit) => {
                    if **lit != *input {
                        return None;
                    }
                }
                Token::Bind(name) => match self.parsers.parse(name, input)? {
                    Ok(value) => params.insert(name, value),
                    Err(e) => {
                        tracing::trace!(url = %self.url, error = %e, "parser rejected segment");
                        return None;
                    }
                },
            }
        }
        Some(params)
    }

    /// Builds an url (without leading slash) from one value per bound parameter.
    ///
    /// Values are not checked against the parsers.
    pub fn build<'a, I, V>(&self, params: I) -> Result<String, RouterError>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Display,
    {
        let values: SmallVec<[(&str, V); 8]> = params.into_iter().collect();

        let mut url = String::new();
        for (i, token) in self.pattern.tokens().iter().enumerate() {
            if i > 0 {
                url.push('/');
            }
            match token {
                Token::Literal(lit) => url.push_str(lit),
                Token::Bind(name) => {
                    let value = match values.iter().find(|(n, _)| *n == &**name) {
                        Some((_, v)) => v,
                        None => return Err(RouterError::MissingValue { name: name.clone() }),
                    };
                    url.push_str(&value.to_string());
                }
            }
        }
        Ok(url)
    }

    pub fn render(&self, params: &Params, hidden: Option<HiddenParams>) -> R {
        self.render.render(params, hidden)
    }
}

impl<R> Route<R> {
    pub(super) fn new(id: RouteId, config: RouteConfig<R>) -> Self {
        let RouteConfig {
            url,
            parsers,
            render,
        } = config;

        let pattern = Pattern::compile(&url);
        let errors = pattern.validate(&parsers);

        Self {
            id,
            url: url.into(),
            pattern,
            parsers,
            render,
            errors,
        }
    }
}

impl<R> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("pattern", &self.pattern)
            .field("parsers", &self.parsers)
            .field("errors", &self.errors)
            .finish()
    }
}
