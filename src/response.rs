//! Response envelope helpers. Success bodies are the bare record; failures carry a message.

use crate::config::Record;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        ErrorResponse {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

pub fn created(record: Record) -> (StatusCode, Json<Record>) {
    (StatusCode::CREATED, Json(record))
}

pub fn found(record: Record) -> (StatusCode, Json<Record>) {
    (StatusCode::OK, Json(record))
}
