//! Availability check endpoints.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    Json,
};
use bakery_core::message::query_received;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::api::ApiError;
use crate::state::AppState;

/// Response for both check endpoints.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub response: String,
}

/// Check whether an item is on the menu.
///
/// A repeated `item` parameter resolves to its last value.
pub async fn check_item(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CheckResponse>, ApiError> {
    let Query(params) = params?;
    let item = params
        .into_iter()
        .filter(|(key, _)| key == "item")
        .map(|(_, value)| value)
        .last()
        .ok_or(ApiError::MissingField {
            location: "query",
            field: "item",
        })?;

    let availability = state.menu.check(&item);
    debug!(item = %item, available = availability.is_available(), "Checked item");

    Ok(Json(CheckResponse {
        response: availability.message(),
    }))
}

/// Acknowledge a free-text query.
///
/// The reply is a fixed template; the menu and the hours table are not
/// consulted. A body without a content type is read as JSON.
pub async fn submit_query(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CheckResponse>, ApiError> {
    if !accepts_json(&headers) {
        return Err(ApiError::Malformed {
            location: "body",
            message: "Expected request with `Content-Type: application/json`".to_string(),
        });
    }

    let body: Value = serde_json::from_slice(&body).map_err(|e| ApiError::Malformed {
        location: "body",
        message: format!("Failed to parse the request body as JSON: {e}"),
    })?;
    let query = required_string(&body, "query")?;

    debug!(query = %query, "Received query");

    Ok(Json(CheckResponse {
        response: query_received(query),
    }))
}

/// Absent, `application/json` and `application/*+json` content types are JSON.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

fn required_string<'a>(body: &'a Value, field: &'static str) -> Result<&'a str, ApiError> {
    let object = body.as_object().ok_or_else(|| ApiError::Malformed {
        location: "body",
        message: "Input should be a JSON object".to_string(),
    })?;

    match object.get(field) {
        None => Err(ApiError::MissingField {
            location: "body",
            field,
        }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ApiError::NotAString {
            location: "body",
            field,
        }),
    }
}
