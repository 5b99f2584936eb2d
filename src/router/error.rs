use std::error::Error as StdError;

/// The error a parameter parser rejects its input with.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A problem found while compiling a route's url against its parser table.
///
/// These are collected on the [`Route`](super::Route) and reported by
/// [`Router::finish`](super::Router::finish). They never abort registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("the parameter '{0}' appears multiple times in the url pattern")]
    DuplicateParam(Box<str>),

    #[error("the parameter '{0}' doesn't have a parser")]
    MissingParser(Box<str>),

    #[error("the parameter '{0}' does not appear in the url")]
    UnusedParser(Box<str>),
}

/// Why an url could not be built for a route.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// A bound parameter of the template got no value.
    #[error("no value for the parameter '{name}'")]
    MissingValue { name: Box<str> },

    /// The route id was issued by a different router.
    #[error("the route is registered in another router")]
    ForeignRoute,
}

/// Rejection returned by a parameter parser.
#[derive(Debug, thiserror::Error)]
#[error("invalid value for the parameter '{name}': {source}")]
pub struct ParseError {
    name: Box<str>,
    #[source]
    source: BoxError,
}

impl ParseError {
    pub(super) fn new(name: &str, source: BoxError) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
