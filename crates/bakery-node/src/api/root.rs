//! Root endpoint.

use axum::Json;
use bakery_core::message::RUNNING_MESSAGE;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: RUNNING_MESSAGE.to_string(),
    })
}
