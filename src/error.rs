//! Typed errors and HTTP mapping.

use crate::response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate resource kind: {0}")]
    DuplicateKind(String),
    #[error("duplicate table: {0}")]
    DuplicateTable(String),
    #[error("resource kind {0} declares no fields")]
    EmptyKind(String),
    #[error("resource kind {kind} declares reserved field '{field}'")]
    ReservedField { kind: String, field: &'static str },
    #[error("resource kind {kind} declares field '{field}' more than once")]
    DuplicateField { kind: String, field: String },
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("family {0} mixes a single kind with named resources")]
    AmbiguousFamily(String),
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// The request body does not have the shape of the target kind.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("body must be a JSON object")]
    NotAnObject,
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Store-level fault, unrelated to input validity.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("row for {kind} does not match its schema: {detail}")]
    Corrupt { kind: String, detail: String },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOp {
    Create,
    Fetch,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOp::Create => f.write_str("create"),
            StoreOp::Fetch => f.write_str("fetch"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    #[error("invalid parameter {name}: '{value}'")]
    InvalidParameter { name: &'static str, value: String },
    #[error("malformed path: {0}")]
    MalformedPath(String),
    #[error("unknown resource kind: {0}")]
    UnknownKind(String),
    #[error("{label} {id} not found")]
    NotFound { label: &'static str, id: i64 },
    #[error("{op} of {label} failed: {source}")]
    Persistence {
        op: StoreOp,
        label: &'static str,
        #[source]
        source: StoreError,
    },
    /// A payload reached the store of a different kind. Not reachable from a request.
    #[error("payload for {found} handed to the {expected} store")]
    KindMismatch { expected: String, found: String },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Persistence { .. } | AppError::KindMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Decode(_)
            | AppError::MissingParameter(_)
            | AppError::InvalidParameter { .. }
            | AppError::MalformedPath(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownKind(_) | AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Client-facing envelope. Server faults carry a generic message only.
    pub fn envelope(&self) -> ErrorResponse {
        match self {
            AppError::Decode(e) => ErrorResponse::with_error("body parser error", e.to_string()),
            AppError::MissingParameter(name) => {
                ErrorResponse::new(format!("{} parameter is required", name.to_uppercase()))
            }
            AppError::InvalidParameter { name, value } => {
                ErrorResponse::with_error(format!("invalid {}", name), format!("'{}' is not an integer", value))
            }
            AppError::MalformedPath(detail) => ErrorResponse::with_error("invalid path", detail.clone()),
            AppError::UnknownKind(_) => ErrorResponse::new("unknown resource kind"),
            AppError::NotFound { label, .. } => ErrorResponse::new(format!("{} data not found", label)),
            AppError::Persistence { op: StoreOp::Create, .. } => {
                ErrorResponse::new("Failed to save data to the database")
            }
            AppError::Persistence { op: StoreOp::Fetch, label, .. } => {
                ErrorResponse::new(format!("Error fetching {} data", label.to_lowercase()))
            }
            AppError::KindMismatch { .. } => ErrorResponse::new("Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(self.envelope())).into_response()
    }
}
