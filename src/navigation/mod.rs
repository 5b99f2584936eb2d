mod location;
mod navigator;
mod view;

pub use self::location::{Listener, ListenerId, Location, MemoryLocation};
pub use self::navigator::{Link, Navigator};
pub use self::view::{RouterContext, RouterView};

use smallvec::SmallVec;

const ROOT: &str = "#/";

/// Splits a location hash into path segments.
///
/// `None` unless the hash starts with `#/`. The bare `#/` is the empty path.
pub fn split_location(hash: &str) -> Option<SmallVec<[&str; 8]>> {
    let path = hash.strip_prefix(ROOT)?;
    if path.is_empty() {
        return Some(SmallVec::new());
    }
    Some(path.split('/').collect())
}
