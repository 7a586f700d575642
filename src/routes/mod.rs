//! Router assembly: common routes, API document, and resource routes under the API prefix.

pub mod common;
pub mod docs;
pub mod resource;

pub use common::common_routes_with_ready;
pub use docs::docs_routes;
pub use resource::resource_routes;

use crate::handlers::resource::unmatched;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Path prefix for every resource route.
pub const API_PREFIX: &str = "/numerical-method";

/// Full application router with CORS, request tracing, and a body size limit.
/// Unrouted paths and methods answer with the `unknown resource kind` envelope.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes(state.clone()))
        .nest(API_PREFIX, resource_routes(state))
        .fallback(unmatched)
        .method_not_allowed_fallback(unmatched)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
