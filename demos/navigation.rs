use hash_router::navigation::{Location, MemoryLocation, Navigator, RouterView};
use hash_router::{parsers, HiddenParams, Parsers, RouteConfig, Router};

use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut router: Router<String> = Router::new();
    let home = router.add(RouteConfig::new("", Parsers::new(), |_, _| {
        "welcome home".to_owned()
    }));
    let post = router.add(RouteConfig::new(
        "user/{name}/post/{id}",
        parsers! { "name": String, "id": u64 },
        |params, hidden| {
            let name = params.get::<String>("name").map(String::as_str).unwrap_or_default();
            let id = params.get::<u64>("id").copied().unwrap_or_default();
            match hidden.and_then(|h| h.downcast::<String>().ok()) {
                Some(title) => format!("post #{} by {}: {}", id, name, title),
                None => format!("post #{} by {}", id, name),
            }
        },
    ));
    // reported by `finish`: `page` is never bound
    router.add(RouteConfig::new("broken", parsers! { "page": u32 }, |_, _| {
        "broken".to_owned()
    }));
    router.finish();

    let router = Arc::new(router);
    let location = Arc::new(MemoryLocation::new("http://127.0.0.1:3000"));
    let view = RouterView::mount_with_fallback(Arc::clone(&router), Arc::clone(&location), || {
        "404 Not Found".to_owned()
    });
    let nav = Navigator::new(Arc::clone(&router), Arc::clone(&location));

    println!("{} => {:?}", location.hash(), view.content());

    let title = HiddenParams::new("Hello, world!".to_owned());
    if let Err(e) = nav.visit(post, vec![("name", "asd"), ("id", "42")], Some(title)) {
        eprintln!("visit failed: {}", e);
    }
    println!("{} => {:?}", location.hash(), view.content());

    view.on_navigation();
    println!("{} => {:?} (hidden params are gone)", location.hash(), view.content());

    location.set_hash("/other/path");
    println!("{} => {:?}", location.hash(), view.content());

    match nav.link(home, Vec::<(&str, &str)>::new()) {
        Ok(link) => {
            link.aux_click();
            link.click();
        }
        Err(e) => eprintln!("link failed: {}", e),
    }
    println!("{} => {:?}", location.hash(), view.content());
    println!("opened windows: {:?}", location.opened());
}
