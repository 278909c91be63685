use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use blotter_lib::Library;

use super::assign_headers;

pub async fn get(State(library): State<Arc<Library>>) -> (HeaderMap, Json<Vec<String>>) {
    let catalog = library.catalog();
    (assign_headers(), Json(catalog.tags().to_vec()))
}
