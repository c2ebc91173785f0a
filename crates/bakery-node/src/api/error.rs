//! Request validation errors.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// A request that does not have the expected shape.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field was absent.
    #[error("{location}.{field}: field required")]
    MissingField {
        location: &'static str,
        field: &'static str,
    },

    /// A field was present but not a string.
    #[error("{location}.{field}: input should be a valid string")]
    NotAString {
        location: &'static str,
        field: &'static str,
    },

    /// The body or query string could not be decoded at all.
    #[error("{location}: {message}")]
    Malformed {
        location: &'static str,
        message: String,
    },
}

/// Validation error body: `{"detail": [...]}`.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub detail: Vec<ValidationDetail>,
}

/// One failing field.
#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub loc: Vec<&'static str>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ApiError {
    fn detail(&self) -> ValidationDetail {
        match self {
            ApiError::MissingField { location, field } => ValidationDetail {
                loc: vec![*location, *field],
                msg: "Field required".to_string(),
                kind: "missing",
            },
            ApiError::NotAString { location, field } => ValidationDetail {
                loc: vec![*location, *field],
                msg: "Input should be a valid string".to_string(),
                kind: "string_type",
            },
            ApiError::Malformed { location, message } => ValidationDetail {
                loc: vec![*location],
                msg: message.clone(),
                kind: if *location == "body" {
                    "json_invalid"
                } else {
                    "value_error"
                },
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("Rejected request: {}", self);
        let body = ValidationErrorBody {
            detail: vec![self.detail()],
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed {
            location: "query",
            message: rejection.body_text(),
        }
    }
}
