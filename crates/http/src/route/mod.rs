pub mod posts;
pub mod refresh;
pub mod tags;

use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, HeaderValue},
    routing, Router,
};
use blotter_lib::Library;

pub fn router(library: Arc<Library>) -> Router {
    Router::new()
        .route("/tags", routing::get(tags::get))
        .route("/posts", routing::get(posts::list))
        .route("/posts/:year/:month/:day", routing::get(posts::get))
        .route("/refresh", routing::get(refresh::run).post(refresh::run))
        .with_state(library)
}

fn assign_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    headers
}
