//! Service contact-request routes

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::error::CatalogError;
use crate::models::{
    ContactResponse, ContactStats, ContactStatus, CreateContactRequest, UpdateContactRequest,
};
use crate::services::ContactService;
use crate::AdminContext;

/// Public contact routes: inquiry submission only.
pub fn contact_public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/service-contacts", post(create_contact))
}

/// Admin contact routes: listing, inspection, lifecycle updates, deletion
/// and statistics.
pub fn contact_admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/service-contacts", get(list_contacts))
        .route("/service-contacts/stats/summary", get(contact_stats))
        .route(
            "/service-contacts/{contact_id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

#[derive(Deserialize)]
struct ListContactsQuery {
    status: Option<ContactStatus>,
}

async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), CatalogError> {
    let svc = ContactService::new((*state.db).clone());
    let contact = svc.create(req).await?;
    Ok((StatusCode::CREATED, Json(ContactResponse::from(contact))))
}

async fn list_contacts(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
    Query(q): Query<ListContactsQuery>,
) -> Result<Json<Vec<ContactResponse>>, CatalogError> {
    tracing::debug!("Admin {} listing contact requests", admin.as_str());
    let svc = ContactService::new((*state.db).clone());
    let contacts = svc.list(q.status).await?;
    Ok(Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

async fn get_contact(
    State(state): State<Arc<AppState>>,
    Extension(_admin): Extension<AdminContext>,
    Path(contact_id): Path<String>,
) -> Result<Json<ContactResponse>, CatalogError> {
    let svc = ContactService::new((*state.db).clone());
    let contact = svc.get(&contact_id).await?;
    Ok(Json(ContactResponse::from(contact)))
}

async fn update_contact(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<AdminContext>,
    Path(contact_id): Path<String>,
    Json(req): Json<UpdateContactRequest>,
) -> Result<Json<ContactResponse>, CatalogError> {
    tracing::debug!("Admin {} updating contact {}", admin.as_str(), contact_id);
    let svc = ContactService::new((*state.db).clone());
    let contact = svc.update(&contact_id, req).await?;
    Ok(Json(ContactResponse::from(contact)))
}

async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Extension(_admin): Extension<AdminContext>,
    Path(contact_id): Path<String>,
) -> Result<Json<serde_json::Value>, CatalogError> {
    let svc = ContactService::new((*state.db).clone());
    svc.delete(&contact_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Service contact deleted successfully"
    })))
}

async fn contact_stats(
    State(state): State<Arc<AppState>>,
    Extension(_admin): Extension<AdminContext>,
) -> Result<Json<ContactStats>, CatalogError> {
    let svc = ContactService::new((*state.db).clone());
    Ok(Json(svc.summary_stats().await?))
}
