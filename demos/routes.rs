//! Routes demo - the REST collaborator answering the stock traffic.
//!
//! Seeds the store with the demo data and walks through the contract:
//! summaries, a fetch, a create, an item add, an update, and a couple of
//! failures, printing status and body for each.
//!
//! Run with: cargo run --example routes

use serde_json::json;

use wick_ui::api::{ApiRequest, ApiResponse, Router};
use wick_ui::todo::Store;

fn show(label: &str, response: &ApiResponse) {
    println!("-- {label}");
    println!("   {} {}\n", response.status, response.body);
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut router = Router::new(Store::seed_demo());

    let res = router.handle(&ApiRequest::get("/lists"));
    show("GET /lists", &res);

    let res = router.handle(&ApiRequest::get("/lists/0"));
    show("GET /lists/0", &res);

    let res = router.handle(&ApiRequest::post("/lists", json!({"name": "Errands"})));
    show("POST /lists {name: Errands}", &res);

    let res = router.handle(&ApiRequest::post("/lists/2/items", json!({"text": "Post office"})));
    show("POST /lists/2/items {text: Post office}", &res);

    let res = router.handle(&ApiRequest::post(
        "/lists/2/items/1",
        json!({"text": "Post office", "status": "COMPLETE"}),
    ));
    show("POST /lists/2/items/1 {status: COMPLETE}", &res);

    let res = router.handle(&ApiRequest::post("/lists", json!({})));
    show("POST /lists {} (validation error)", &res);

    let res = router.handle(&ApiRequest::get("/lists/9"));
    show("GET /lists/9 (not found)", &res);
}
