use std::any::Any;
use std::fmt;

use smallvec::SmallVec;

pub(crate) type BoxValue = Box<dyn Any + Send + Sync>;

/// Parameters parsed from the url, keyed by the names bound in the pattern.
pub struct Params {
    buf: SmallVec<[(Box<str>, BoxValue); 8]>,
}

impl Params {
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.buf
            .iter()
            .find_map(|(k, v)| if &**k == name { v.downcast_ref::<T>() } else { None })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.buf.iter().any(|(k, _)| &**k == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.buf.iter().map(|(k, _)| &**k)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Params {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// Later bindings of the same name overwrite earlier ones in place.
    pub(super) fn insert(&mut self, name: &str, value: BoxValue) {
        match self.buf.iter_mut().find(|(k, _)| &**k == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name.into(), value)),
        }
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// A payload handed to a route's render callback outside of the url.
///
/// See [`Router::set_hidden_params`](super::Router::set_hidden_params).
pub struct HiddenParams {
    value: BoxValue,
}

impl HiddenParams {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
        }
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.value.downcast::<T>() {
            Ok(v) => Ok(*v),
            Err(value) => Err(Self { value }),
        }
    }
}

impl fmt::Debug for HiddenParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HiddenParams").finish()
    }
}
