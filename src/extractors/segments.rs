//! Path segments extractor whose rejection is the JSON error envelope.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Like `Path<T>`, but undecodable segments (e.g. invalid UTF-8 after percent-decoding)
/// become a 400 `invalid path` envelope instead of a plain-text rejection.
#[derive(Debug)]
pub struct Segments<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Segments<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Segments(value)),
            Err(rejection) => Err(AppError::MalformedPath(rejection.body_text())),
        }
    }
}
