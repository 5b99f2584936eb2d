use super::location::{ListenerId, Location};
use super::split_location;
use crate::router::{Match, Params, RouteId, Router};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{const_mutex, Mutex};

type Fallback<R> = Box<dyn Fn() -> R + Send + Sync>;

/// Mounted views per router, keyed by the address of the router.
static MOUNTED: Mutex<Vec<(usize, usize)>> = const_mutex(Vec::new());

fn router_key<R>(router: &Arc<Router<R>>) -> usize {
    Arc::as_ptr(router) as *const () as usize
}

fn count_mount(key: usize) -> usize {
    let mut mounted = MOUNTED.lock();
    match mounted.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => {
            *n += 1;
            *n
        }
        None => {
            mounted.push((key, 1));
            1
        }
    }
}

fn count_unmount(key: usize) -> bool {
    let mut mounted = MOUNTED.lock();
    let i = match mounted.iter().position(|(k, _)| *k == key) {
        Some(i) => i,
        None => return false,
    };
    mounted[i].1 -= 1;
    if mounted[i].1 == 0 {
        mounted.swap_remove(i);
    }
    true
}

/// The route currently shown by a [`RouterView`].
#[derive(Debug, Default)]
pub struct RouterContext {
    pub route: Option<RouteId>,
    pub params: Option<Params>,
}

/// Keeps the output of a router in sync with a [`Location`].
///
/// Mounting subscribes to location changes and renders once. Every change of
/// the hash matches the router again and replaces the current output.
/// Dropping the view unsubscribes.
pub struct RouterView<R, L>
where
    R: Send + 'static,
    L: Location + 'static,
{
    inner: Arc<Inner<R, L>>,
    listener: ListenerId,
}

struct Inner<R, L> {
    router: Arc<Router<R>>,
    location: Arc<L>,
    fallback: Option<Fallback<R>>,
    current: Mutex<Current<R>>,
    /// Bumped by every navigation pass. A pass only stores its output if no
    /// newer pass started meanwhile.
    generation: AtomicU64,
}

struct Current<R> {
    content: Option<R>,
    context: RouterContext,
}

impl<R, L> RouterView<R, L>
where
    R: Send + 'static,
    L: Location + 'static,
{
    pub fn mount(router: Arc<Router<R>>, location: Arc<L>) -> Self {
        Self::mount_inner(router, location, None)
    }

    /// Like [`mount`](Self::mount), rendering `fallback` when no route matches.
    pub fn mount_with_fallback<F>(router: Arc<Router<R>>, location: Arc<L>, fallback: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self::mount_inner(router, location, Some(Box::new(fallback)))
    }

    fn mount_inner(
        router: Arc<Router<R>>,
        location: Arc<L>,
        fallback: Option<Fallback<R>>,
    ) -> Self {
        let mounted = count_mount(router_key(&router));
        if mounted > 1 {
            tracing::error!(mounted, "more than one view is mounted for the same router");
        }

        let inner = Arc::new(Inner {
            router,
            location,
            fallback,
            current: Mutex::new(Current {
                content: None,
                context: RouterContext::default(),
            }),
            generation: AtomicU64::new(0),
        });

        let weak: Weak<Inner<R, L>> = Arc::downgrade(&inner);
        let listener = inner.location.add_listener(Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.navigated();
            }
        }));

        inner.navigated();
        Self { inner, listener }
    }

    /// Matches the current location again.
    pub fn on_navigation(&self) {
        self.inner.navigated()
    }

    /// Runs `f` on the current output. `f` must not navigate.
    pub fn with_current<T>(&self, f: impl FnOnce(Option<&R>, &RouterContext) -> T) -> T {
        let current = self.inner.current.lock();
        f(current.content.as_ref(), &current.context)
    }

    pub fn content(&self) -> Option<R>
    where
        R: Clone,
    {
        self.inner.current.lock().content.clone()
    }

    pub fn current_route(&self) -> Option<RouteId> {
        self.inner.current.lock().context.route
    }

    pub fn router(&self) -> &Arc<Router<R>> {
        &self.inner.router
    }

    pub fn dispose(self) {}
}

impl<R, L> Drop for RouterView<R, L>
where
    R: Send + 'static,
    L: Location + 'static,
{
    fn drop(&mut self) {
        self.inner.location.remove_listener(self.listener);

        if !count_unmount(router_key(&self.inner.router)) {
            tracing::warn!("mounted view counter of the router is out of sync");
        }
    }
}

impl<R, L: Location> Inner<R, L> {
    fn navigated(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let hash = self.location.hash();

        let segments = match split_location(&hash) {
            Some(s) => s,
            None => {
                // resetting the hash notifies the listeners again
                tracing::debug!(%hash, "malformed location, resetting to #/");
                self.location.set_hash("#/");
                return;
            }
        };

        let current = match self.router.match_segments(&segments) {
            Some(Match {
                route,
                params,
                hidden,
            }) => Current {
                content: Some(route.render(&params, hidden)),
                context: RouterContext {
                    route: Some(route.id()),
                    params: Some(params),
                },
            },
            None => Current {
                content: self.fallback.as_ref().map(|f| f()),
                context: RouterContext::default(),
            },
        };

        // a render that navigates runs a nested pass before this one stores
        let mut slot = self.current.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "navigation pass superseded");
            return;
        }
        *slot = current;
    }
}
