#![cfg(feature = "navigation")]

use hash_router::navigation::{Location, MemoryLocation, Navigator, RouterView};
use hash_router::{parsers, HiddenParams, Parsers, RouteConfig, RouteId, Router, RouterError};

use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

const ORIGIN: &str = "http://localhost:3000";

struct App {
    router: Arc<Router<String>>,
    home: RouteId,
    user: RouteId,
}

fn app() -> App {
    let mut router = Router::new();
    let home = router.add(RouteConfig::new("", Parsers::new(), |_, _| "home".to_owned()));
    let user = router.add(RouteConfig::new(
        "user/{name}",
        parsers! { "name": String },
        |params, hidden| {
            let name = params.get::<String>("name").map(String::as_str).unwrap_or("?");
            match hidden.and_then(|h| h.downcast::<String>().ok()) {
                Some(note) => format!("user {} ({})", name, note),
                None => format!("user {}", name),
            }
        },
    ));
    assert_eq!(router.finish(), 0);
    App {
        router: Arc::new(router),
        home,
        user,
    }
}

#[test]
fn mount_renders_current_location() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#/user/asd"));
    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));

    assert_eq!(view.content().unwrap(), "user asd");
    assert_eq!(view.current_route(), Some(app.user));
    view.with_current(|_, ctx| {
        let params = ctx.params.as_ref().unwrap();
        assert_eq!(params.get::<String>("name").unwrap(), "asd");
    });
}

#[test]
fn malformed_location_is_reset() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#user"));
    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));

    assert_eq!(location.hash(), "#/");
    assert_eq!(view.content().unwrap(), "home");
    assert_eq!(view.current_route(), Some(app.home));

    let location = Arc::new(MemoryLocation::new(ORIGIN));
    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));
    assert_eq!(location.hash(), "#/");
    assert_eq!(view.content().unwrap(), "home");
}

#[test]
fn fallback_when_nothing_matches() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#/nowhere"));
    let view = RouterView::mount_with_fallback(Arc::clone(&app.router), Arc::clone(&location), || {
        "404".to_owned()
    });
    assert_eq!(view.content().unwrap(), "404");
    assert_eq!(view.current_route(), None);
    drop(view);

    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));
    assert_eq!(view.content(), None);
}

#[test]
fn visit_delivers_hidden_params_once() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#/"));
    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));
    let nav = Navigator::new(Arc::clone(&app.router), Arc::clone(&location));

    nav.visit(app.user, vec![("name", "bob")], Some(HiddenParams::new("hi".to_owned())))
        .unwrap();
    assert_eq!(location.hash(), "#/user/bob");
    assert_eq!(view.content().unwrap(), "user bob (hi)");

    view.on_navigation();
    assert_eq!(view.content().unwrap(), "user bob");
}

#[test]
fn hidden_params_for_other_route_are_dropped() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#/"));
    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));

    app.router
        .set_hidden_params(app.user, Some(HiddenParams::new("late".to_owned())));
    location.set_hash("/user/eve");
    assert_eq!(view.content().unwrap(), "user eve (late)");

    app.router
        .set_hidden_params(app.user, Some(HiddenParams::new("lost".to_owned())));
    location.set_hash("/");
    assert_eq!(view.content().unwrap(), "home");
    location.set_hash("/user/eve");
    assert_eq!(view.content().unwrap(), "user eve");
}

#[test]
fn open_and_links() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#/"));
    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));
    let nav = Navigator::new(Arc::clone(&app.router), Arc::clone(&location));

    nav.open(app.user, vec![("name", "amy")]).unwrap();
    assert_eq!(location.opened(), ["http://localhost:3000/#/user/amy"]);
    assert_eq!(location.hash(), "#/");

    let link = nav.link(app.user, vec![("name", "joe")]).unwrap();
    assert_eq!(link.url(), "user/joe");
    link.aux_click();
    assert_eq!(location.opened().len(), 2);

    link.click();
    assert_eq!(location.hash(), "#/user/joe");
    assert_eq!(view.content().unwrap(), "user joe");
}

#[test]
fn navigator_errors() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN));
    let nav = Navigator::new(Arc::clone(&app.router), Arc::clone(&location));

    let err = nav.visit(app.user, Vec::<(&str, &str)>::new(), None).unwrap_err();
    assert!(matches!(err, RouterError::MissingValue { .. }));

    let mut other: Router<String> = Router::new();
    let foreign = other.add(RouteConfig::new("x", Parsers::new(), |_, _| String::new()));
    let err = nav.open(foreign, Vec::<(&str, &str)>::new()).unwrap_err();
    assert!(matches!(err, RouterError::ForeignRoute));
    assert!(location.opened().is_empty());
}

#[test]
fn drop_unsubscribes() {
    let app = app();
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#/"));
    let view = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));
    assert_eq!(location.listener_count(), 1);

    let second = RouterView::mount(Arc::clone(&app.router), Arc::clone(&location));
    assert_eq!(location.listener_count(), 2);
    second.dispose();

    drop(view);
    assert_eq!(location.listener_count(), 0);

    app.router
        .set_hidden_params(app.user, Some(HiddenParams::new("kept".to_owned())));
    location.set_hash("/user/zed");
    assert!(app.router.has_hidden_params());
}

#[test]
fn render_that_redirects_keeps_the_redirect_target() {
    type Nav = Navigator<String, MemoryLocation>;

    let slot: Arc<Mutex<Option<Nav>>> = Arc::new(Mutex::new(None));
    let mut router = Router::new();
    let home = router.add(RouteConfig::new("", Parsers::new(), |_, _| "home".to_owned()));
    let old = {
        let slot = Arc::clone(&slot);
        router.add(RouteConfig::new("old", Parsers::new(), move |_, _| {
            if let Some(nav) = &*slot.lock() {
                nav.visit(home, Vec::<(&str, &str)>::new(), None).unwrap();
            }
            "old".to_owned()
        }))
    };
    assert_eq!(router.finish(), 0);

    let router = Arc::new(router);
    let location = Arc::new(MemoryLocation::new(ORIGIN).with_hash("#/"));
    let view = RouterView::mount(Arc::clone(&router), Arc::clone(&location));
    *slot.lock() = Some(Navigator::new(Arc::clone(&router), Arc::clone(&location)));

    location.set_hash("/old");
    assert_eq!(location.hash(), "#/");
    assert_eq!(view.content().unwrap(), "home");
    assert_eq!(view.current_route(), Some(home));
    assert_ne!(view.current_route(), Some(old));

    *slot.lock() = None;
}
