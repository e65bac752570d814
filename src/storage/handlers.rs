//! CRUD handlers for the storage service.
//!
//! # Responsibilities
//! - Parse route-param ids (parse failure is a miss, not a 400)
//! - Delegate to the item store
//! - Produce the fixed wire shapes consumers depend on

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

use crate::store::ItemStore;

/// Parse a route-param id. Anything that is not a plain integer matches no
/// item.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Item not found"})),
    )
        .into_response()
}

/// `GET /storage/item/{id}`: look up one item, projected to its
/// `{id, name, description}` read shape.
pub async fn get_item(State(store): State<Arc<ItemStore>>, Path(id): Path<String>) -> Response {
    match parse_id(&id).and_then(|id| store.get(id)) {
        Some(item) => Json(item.summary()).into_response(),
        None => {
            tracing::debug!(id = %id, "Item lookup missed");
            not_found()
        }
    }
}

/// `POST /storage/item`: append a new item built from the caller's fields.
pub async fn create_item(
    State(store): State<Arc<ItemStore>>,
    Json(fields): Json<Map<String, Value>>,
) -> Response {
    let id = store.create(fields);
    tracing::debug!(id, "Item created");

    (
        StatusCode::CREATED,
        Json(json!({"status": "success", "id": id})),
    )
        .into_response()
}

/// `PUT /storage/item/{id}`: shallow-merge the caller's fields onto an
/// existing item.
pub async fn update_item(
    State(store): State<Arc<ItemStore>>,
    Path(id): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Response {
    let updated = parse_id(&id).is_some_and(|id| store.update(id, fields));
    if updated {
        tracing::debug!(id = %id, "Item updated");
        Json(json!({"status": "updated"})).into_response()
    } else {
        not_found()
    }
}

/// `DELETE /storage/item/{id}`: remove an item.
///
/// The response echoes the raw path segment, not the parsed integer;
/// existing consumers depend on the string shape.
pub async fn delete_item(State(store): State<Arc<ItemStore>>, Path(id): Path<String>) -> Response {
    let removed = parse_id(&id).is_some_and(|parsed| store.remove(parsed));
    if removed {
        tracing::debug!(id = %id, "Item deleted");
        Json(json!({"status": "deleted", "id": id})).into_response()
    } else {
        not_found()
    }
}

/// `GET /storage/items`: the full collection, insertion order, no
/// pagination.
pub async fn list_items(State(store): State<Arc<ItemStore>>) -> Response {
    Json(store.list()).into_response()
}
