use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use blotter_lib::{Library, Post};
use tracing::{debug, info};

use super::assign_headers;

pub async fn list(State(library): State<Arc<Library>>) -> (HeaderMap, Json<Vec<Arc<Post>>>) {
    let catalog = library.catalog();
    (assign_headers(), Json(catalog.posts().to_vec()))
}

fn pad(component: &str, width: usize, prefix: &str) -> Result<String, StatusCode> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        debug!("rejecting date component {component:?}");
        return Err(StatusCode::BAD_REQUEST);
    }
    match component.len() {
        len if len == width => Ok(component.to_owned()),
        len if len + prefix.len() == width => Ok(format!("{prefix}{component}")),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

/// Turns `/posts/18/4/5` style components into the `2018-04-05` lookup key.
/// Two-digit years are taken to be in the 2000s.
fn date_key(year: &str, month: &str, day: &str) -> Result<String, StatusCode> {
    let year = pad(year, 4, "20")?;
    let month = pad(month, 2, "0")?;
    let day = pad(day, 2, "0")?;
    Ok(format!("{year}-{month}-{day}"))
}

fn get_inner(
    library: &Library,
    year: &str,
    month: &str,
    day: &str,
) -> Result<Arc<Post>, StatusCode> {
    let key = date_key(year, month, day)?;
    info!("requested: {key}");

    let catalog = library.catalog();
    catalog.get(&key).cloned().ok_or(StatusCode::NOT_FOUND)
}

pub async fn get(
    State(library): State<Arc<Library>>,
    Path((year, month, day)): Path<(String, String, String)>,
) -> Result<(HeaderMap, Json<Arc<Post>>), StatusCode> {
    let post = get_inner(&library, &year, &month, &day)?;

    Ok((assign_headers(), Json(post)))
}
