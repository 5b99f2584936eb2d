use super::error::ConfigError;
use super::parser::Parsers;

use smallvec::SmallVec;

const SLASH: char = '/';
const OPEN: char = '{';
const CLOSE: char = '}';

/// One segment of a compiled url template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Matches a segment equal to the text.
    Literal(Box<str>),
    /// Matches any segment the named parser accepts.
    Bind(Box<str>),
}

/// A compiled url template, one token per `/`-delimited segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    tokens: SmallVec<[Token; 8]>,
}

impl Pattern {
    /// `{name}` binds a whole segment. Anything else, including partial
    /// bindings like `user-{id}`, is a literal.
    pub fn compile(url: &str) -> Self {
        if url.is_empty() {
            return Self::default();
        }
        let tokens = url
            .split(SLASH)
            .map(|part| match bind_name(part) {
                Some(name) => Token::Bind(name.into()),
                None => Token::Literal(part.into()),
            })
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn binds(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Bind(name) => Some(&**name),
            Token::Literal(_) => None,
        })
    }

    pub fn validate(&self, parsers: &Parsers) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut seen: SmallVec<[&str; 8]> = SmallVec::new();

        for name in self.binds() {
            if seen.contains(&name) {
                errors.push(ConfigError::DuplicateParam(name.into()));
            } else {
                seen.push(name);
            }
            if !parsers.contains(name) {
                errors.push(ConfigError::MissingParser(name.into()));
            }
        }

        for name in parsers.names() {
            if !seen.contains(&name) {
                errors.push(ConfigError::UnusedParser(name.into()));
            }
        }

        errors
    }
}

#[inline]
fn bind_name(part: &str) -> Option<&str> {
    if part.len() < 2 {
        return None;
    }
    part.strip_prefix(OPEN)?.strip_suffix(CLOSE)
}
