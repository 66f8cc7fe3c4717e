//! Service catalog routes

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::AppState;
use crate::error::CatalogError;
use crate::models::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::services::CatalogService;

/// Upload size limit: 10MB
const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

pub fn service_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route("/services/upload-image", post(upload_service_image))
        .route(
            "/services/{service_id}",
            get(get_service)
                .put(update_service)
                .delete(delete_service),
        )
}

async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceResponse>>, CatalogError> {
    let svc = CatalogService::new((*state.db).clone());
    let services = svc.list(state.max_list_results).await?;
    Ok(Json(
        services.into_iter().map(ServiceResponse::from).collect(),
    ))
}

async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<Json<ServiceResponse>, CatalogError> {
    let svc = CatalogService::new((*state.db).clone());
    let service = svc.get(&service_id).await?;
    Ok(Json(ServiceResponse::from(service)))
}

async fn create_service(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), CatalogError> {
    let svc = CatalogService::new((*state.db).clone());
    let service = svc.create(req).await?;
    Ok((StatusCode::CREATED, Json(ServiceResponse::from(service))))
}

async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
    Json(req): Json<UpdateServiceRequest>,
) -> Result<Json<ServiceResponse>, CatalogError> {
    let svc = CatalogService::new((*state.db).clone());
    let service = svc.update(&service_id, req).await?;
    Ok(Json(ServiceResponse::from(service)))
}

async fn delete_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<Json<serde_json::Value>, CatalogError> {
    let svc = CatalogService::new((*state.db).clone());
    svc.delete(&service_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Service deleted successfully"
    })))
}

/// Upload a service image.
///
/// Public endpoint with no auth requirement — carried over from the original
/// admin-panel integration and tracked as an open security question, not
/// silently gated.
async fn upload_service_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, CatalogError> {
    let mut file_name = String::new();
    let mut file_data = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CatalogError::Validation(e.to_string()))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().unwrap_or("unknown").to_string();
            file_data = field
                .bytes()
                .await
                .map_err(|e| CatalogError::Validation(e.to_string()))?
                .to_vec();
        }
    }

    if file_data.is_empty() {
        return Err(CatalogError::Validation("No file supplied".to_string()));
    }
    if file_data.len() > MAX_UPLOAD_SIZE {
        return Err(CatalogError::Validation(format!(
            "File exceeds 10MB limit ({} bytes)",
            file_data.len()
        )));
    }

    let url = state.uploads.save_image(&file_name, &file_data).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "url": url,
        "filename": file_name,
        "message": "Image uploaded successfully"
    })))
}
