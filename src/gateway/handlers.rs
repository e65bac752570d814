//! Forwarding handlers for the API gateway.
//!
//! # Responsibilities
//! - Translate `/api/...` paths to `/storage/...` paths
//! - Make exactly one backend call per request
//! - Relay 2xx responses unchanged; substitute the route's fixed message
//!   for anything else

use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::gateway::routes::GatewayRoute;
use crate::gateway::server::AppState;

/// `GET /api/item/{id}` → `GET /storage/item/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    forward(
        &state,
        GatewayRoute::FetchItem,
        Method::GET,
        &format!("/storage/item/{id}"),
        &headers,
        None,
    )
    .await
}

/// `POST /api/item` → `POST /storage/item`
pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward(
        &state,
        GatewayRoute::SaveItem,
        Method::POST,
        "/storage/item",
        &headers,
        Some(body),
    )
    .await
}

/// `PUT /api/item/{id}` → `PUT /storage/item/{id}`
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward(
        &state,
        GatewayRoute::UpdateItem,
        Method::PUT,
        &format!("/storage/item/{id}"),
        &headers,
        Some(body),
    )
    .await
}

/// `DELETE /api/item/{id}` → `DELETE /storage/item/{id}`
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    forward(
        &state,
        GatewayRoute::DeleteItem,
        Method::DELETE,
        &format!("/storage/item/{id}"),
        &headers,
        None,
    )
    .await
}

/// `GET /api/items` → `GET /storage/items`
pub async fn list_items(State(state): State<AppState>, headers: HeaderMap) -> Response {
    forward(
        &state,
        GatewayRoute::ListItems,
        Method::GET,
        "/storage/items",
        &headers,
        None,
    )
    .await
}

/// Make the single forwarded call for a route.
///
/// 2xx backend responses are relayed as-is, body streamed through. Non-2xx
/// responses keep the backend's status but carry the route's fixed message.
/// Transport failures surface as 500 with the same fixed message.
async fn forward(
    state: &AppState,
    route: GatewayRoute,
    method: Method,
    path: &str,
    request_headers: &HeaderMap,
    body: Option<Bytes>,
) -> Response {
    let uri: Uri = match format!("{}{}", state.storage_base, path).parse() {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(error = %e, path = %path, "Invalid backend URI");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, route);
        }
    };

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(headers) = builder.headers_mut() {
        if body.is_some() {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        // Correlate gateway and backend logs.
        if let Some(request_id) = request_headers.get("x-request-id") {
            headers.insert("x-request-id", request_id.clone());
        }
    }

    let request = match builder.body(match body {
        Some(bytes) => Body::from(bytes),
        None => Body::empty(),
    }) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build backend request");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, route);
        }
    };

    match state.client.request(request).await {
        Ok(response) if response.status().is_success() => {
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body)).into_response()
        }
        Ok(response) => {
            tracing::warn!(
                status = %response.status(),
                route = ?route,
                "Backend returned error status"
            );
            error_response(response.status(), route)
        }
        Err(e) => {
            tracing::error!(error = %e, route = ?route, "Backend request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, route)
        }
    }
}

fn error_response(status: StatusCode, route: GatewayRoute) -> Response {
    (status, Json(json!({"message": route.error_message()}))).into_response()
}
