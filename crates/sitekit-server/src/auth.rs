//! Admin authentication middleware
//!
//! Privileged routes are gated on a bearer token compared against the
//! configured admin API key. On success an [`AdminContext`] extension is
//! inserted so handlers can require an authenticated admin without knowing
//! how the check was performed.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;
use sitekit_catalog::{AdminContext, CatalogError};

/// Reject the request unless it carries the configured admin API key.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match (&state.config.admin_api_key, provided) {
        (Some(expected), Some(token)) if token == expected.as_str() => {
            request
                .extensions_mut()
                .insert(AdminContext("admin".to_string()));
            next.run(request).await
        }
        (None, _) => {
            warn!("Admin request rejected: no ADMIN_API_KEY configured");
            CatalogError::Unauthorized.into_response()
        }
        _ => CatalogError::Unauthorized.into_response(),
    }
}
