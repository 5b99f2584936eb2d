use super::error::{BoxError, ParseError};
use super::params::BoxValue;

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

type ParseFn = Box<dyn Fn(&str) -> Result<BoxValue, BoxError> + Send + Sync>;

/// The parser table of a route: one parse function per bound parameter.
///
/// A parser rejects a segment by returning `Err`. The rejection is what makes
/// the route not match; panics are not caught.
#[derive(Default)]
pub struct Parsers {
    entries: SmallVec<[(Box<str>, ParseFn); 4]>,
}

impl Parsers {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Parses the parameter `name` with `T::from_str`.
    pub fn with<T>(self, name: &str) -> Self
    where
        T: FromStr + Any + Send + Sync,
        T::Err: Into<BoxError>,
    {
        self.with_fn(name, T::from_str)
    }

    pub fn with_fn<T, E, F>(mut self, name: &str, f: F) -> Self
    where
        T: Any + Send + Sync,
        E: Into<BoxError>,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        self.insert(name, f);
        self
    }

    /// Registering a name twice replaces the previous parser.
    pub fn insert<T, E, F>(&mut self, name: &str, f: F) -> &mut Self
    where
        T: Any + Send + Sync,
        E: Into<BoxError>,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        let parse: ParseFn = Box::new(move |s: &str| match f(s) {
            Ok(v) => Ok(Box::new(v) as BoxValue),
            Err(e) => Err(e.into()),
        });
        match self.entries.iter_mut().find(|(n, _)| &**n == name) {
            Some(entry) => entry.1 = parse,
            None => self.entries.push((name.into(), parse)),
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| &**n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| &**n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `None` when there is no parser for `name`.
    pub(super) fn parse(&self, name: &str, input: &str) -> Option<Result<BoxValue, ParseError>> {
        let (_, f) = self.entries.iter().find(|(n, _)| &**n == name)?;
        Some(f(input).map_err(|e| ParseError::new(name, e)))
    }
}

impl fmt::Debug for Parsers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Builds a [`Parsers`](crate::Parsers) table.
///
/// `"name": Type` parses with `FromStr`, `"name" => f` uses any parse function.
///
/// ```
/// use hash_router::parsers;
///
/// let p = parsers! {
///     "id": u32,
///     "slug" => |s: &str| if s.is_empty() { Err("empty") } else { Ok(s.to_owned()) },
/// };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! parsers {
    {@entry $parsers:ident;} => {};
    {@entry $parsers:ident; $name:literal : $ty:ty $(, $($rest:tt)*)?} => {
        $parsers.insert($name, <$ty as ::std::str::FromStr>::from_str);
        $crate::parsers!(@entry $parsers; $($($rest)*)?);
    };
    {@entry $parsers:ident; $name:literal => $parser:expr $(, $($rest:tt)*)?} => {
        $parsers.insert($name, $parser);
        $crate::parsers!(@entry $parsers; $($($rest)*)?);
    };

    {$($entries:tt)*} => {{
        #[allow(unused_mut)]
        let mut __parsers = $crate::Parsers::new();
        $crate::parsers!(@entry __parsers; $($entries)*);
        __parsers
    }};
}
