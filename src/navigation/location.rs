use std::sync::Arc;

use parking_lot::Mutex;

pub type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The navigation state of the host: the hash part of the current location.
pub trait Location: Send + Sync {
    /// The current hash, `""` or starting with `#`.
    fn hash(&self) -> String;

    /// Replaces the hash. A leading `#` is optional.
    ///
    /// Listeners are notified when the hash actually changes.
    fn set_hash(&self, hash: &str);

    /// Scheme, host and port of the current location.
    fn origin(&self) -> String;

    /// Opens `url` in a new window.
    fn open_window(&self, url: &str);

    fn add_listener(&self, listener: Listener) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);
}

/// A [`Location`] kept in memory. Listeners run synchronously in `set_hash`.
pub struct MemoryLocation {
    origin: String,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    hash: String,
    opened: Vec<String>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl MemoryLocation {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_hash(self, hash: &str) -> Self {
        self.state.lock().hash = normalize_hash(hash);
        self
    }

    /// Urls passed to [`Location::open_window`], oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.state.lock().opened.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.state.lock().hash.clone()
    }

    fn set_hash(&self, hash: &str) {
        let hash = normalize_hash(hash);
        let listeners: Vec<Listener> = {
            let mut state = self.state.lock();
            if state.hash == hash {
                return;
            }
            state.hash = hash;
            state.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        // listeners may navigate again, so the lock must not be held here
        for listener in listeners {
            listener();
        }
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn open_window(&self, url: &str) {
        self.state.lock().opened.push(url.to_owned());
    }

    fn add_listener(&self, listener: Listener) -> ListenerId {
        let mut state = self.state.lock();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.state.lock().listeners.retain(|(i, _)| *i != id);
    }
}

fn normalize_hash(hash: &str) -> String {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    if hash.is_empty() {
        String::new()
    } else {
        format!("#{}", hash)
    }
}
