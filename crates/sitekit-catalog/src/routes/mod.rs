//! HTTP routes for the catalog module

pub mod contacts;
pub mod services;

use crate::db::MongoDb;
use crate::services::UploadService;
use axum::Router;
use std::sync::Arc;

/// App state shared by the catalog routes
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<MongoDb>,
    pub uploads: UploadService,
    /// Upper bound on the service listing result count (store-adapter
    /// truncation boundary, not a correctness guarantee).
    pub max_list_results: i64,
}

/// Routes that require no authentication: the whole service catalog
/// (including image upload, public by design) and contact-request creation.
pub fn public_routes() -> Router<Arc<AppState>> {
    services::service_routes().merge(contacts::contact_public_routes())
}

/// Admin-gated routes: contact management and statistics. The server wraps
/// this router with the admin-auth middleware.
pub fn admin_routes() -> Router<Arc<AppState>> {
    contacts::contact_admin_routes()
}
