//! Resource handlers: resolve the kind from the path, run the pipeline, map the outcome.

use crate::config::ResourceKind;
use crate::error::AppError;
use crate::response;
use crate::service::ResourcePipeline;
use crate::state::AppState;
use crate::extractors::Segments;
use axum::{body::Bytes, extract::State, http::Uri, response::IntoResponse};

fn kind_for(state: &AppState, family: &str, resource: Option<&str>) -> Result<&'static ResourceKind, AppError> {
    state.registry.resolve(family, resource).ok_or_else(|| {
        AppError::UnknownKind(match resource {
            Some(resource) => format!("{}/{}", family, resource),
            None => family.to_string(),
        })
    })
}

async fn create_kind(state: &AppState, kind: &'static ResourceKind, body: &[u8]) -> Result<impl IntoResponse, AppError> {
    let record = ResourcePipeline::create(state.store.as_ref(), kind, body).await?;
    Ok(response::created(record))
}

async fn read_kind(state: &AppState, kind: &'static ResourceKind, id: &str) -> Result<impl IntoResponse, AppError> {
    let record = ResourcePipeline::fetch(state.store.as_ref(), kind, id).await?;
    Ok(response::found(record))
}

/// POST /{family}/{resource}
pub async fn create(
    State(state): State<AppState>,
    Segments((family, resource)): Segments<(String, String)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind_for(&state, &family, Some(&resource))?;
    create_kind(&state, kind, &body).await
}

/// POST /{family} for single-kind families.
pub async fn create_single(
    State(state): State<AppState>,
    Segments(family): Segments<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind_for(&state, &family, None)?;
    create_kind(&state, kind, &body).await
}

/// GET /{family}/{resource}/{id}
pub async fn read(
    State(state): State<AppState>,
    Segments((family, resource, id)): Segments<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind_for(&state, &family, Some(&resource))?;
    read_kind(&state, kind, &id).await
}

/// GET /{family}/{segment}: the id of a single-kind family, or a named kind with its id missing.
pub async fn read_segment(
    State(state): State<AppState>,
    Segments((family, segment)): Segments<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    if state.registry.resolve(&family, Some(&segment)).is_some() {
        return Err(AppError::MissingParameter("id"));
    }
    if !state.registry.is_single_kind_family(&family) {
        return Err(AppError::UnknownKind(format!("{}/{}", family, segment)));
    }
    let kind = kind_for(&state, &family, None)?;
    read_kind(&state, kind, &segment).await
}

/// GET /{family}/{resource}/: the id segment is empty.
pub async fn read_missing_id(
    State(state): State<AppState>,
    Segments((family, resource)): Segments<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind_for(&state, &family, Some(&resource))?;
    read_kind(&state, kind, "").await
}

/// GET /{family} and /{family}/ for single-kind families: the id segment is empty.
pub async fn read_single_missing_id(
    State(state): State<AppState>,
    Segments(family): Segments<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind_for(&state, &family, None)?;
    read_kind(&state, kind, "").await
}

/// Any path or method no resource route serves.
pub async fn unmatched(uri: Uri) -> AppError {
    AppError::UnknownKind(uri.path().to_string())
}
