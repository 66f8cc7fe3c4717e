//! Service model — a purchasable website-template offering

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default label for the outbound link button
pub const DEFAULT_LINK_TEXT: &str = "Learn More";

fn default_link_text() -> Option<String> {
    Some(DEFAULT_LINK_TEXT.to_string())
}

fn default_active() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Service (stored shape)
// ---------------------------------------------------------------------------

/// A service offering as stored in MongoDB.
///
/// `id` is the public uuid identifier; `_id` is the store-internal ObjectId
/// and never leaves the persistence layer. `image` (legacy single image) and
/// `images` coexist on purpose: downstream consumers may depend on either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default = "default_link_text")]
    pub link_text: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Creation shape. `id`, `created_at` and `updated_at` are always
/// system-assigned and cannot be supplied here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(required, length(min = 1, message = "title is required"))]
    pub title: Option<String>,
    #[validate(required, length(min = 1, message = "description is required"))]
    pub description: Option<String>,
    #[validate(required, length(min = 1, message = "icon is required"))]
    pub icon: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<String>,
    pub active: Option<bool>,
    pub order: Option<i32>,
}

/// Partial-update shape: only supplied fields are written, absent fields are
/// left untouched (merge, not replace).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "icon cannot be empty"))]
    pub icon: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<String>,
    pub active: Option<bool>,
    pub order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Response type
// ---------------------------------------------------------------------------

/// Public shape of a service: internal `_id` is stripped, timestamps are
/// RFC 3339 strings, and optional collection fields are always emitted with
/// their defaults rather than omitted.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub link: Option<String>,
    pub link_text: String,
    pub features: Vec<String>,
    pub price: Option<String>,
    pub active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponse {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            icon: s.icon,
            image: s.image,
            images: s.images,
            link: s.link,
            link_text: s.link_text.unwrap_or_else(|| DEFAULT_LINK_TEXT.to_string()),
            features: s.features,
            price: s.price,
            active: s.active,
            order: s.order,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_text_fields() {
        let req: CreateServiceRequest = serde_json::from_value(serde_json::json!({
            "title": "Web Dev"
        }))
        .unwrap();
        assert!(req.validate().is_err());

        let req: CreateServiceRequest = serde_json::from_value(serde_json::json!({
            "title": "Web Dev",
            "description": "Custom web applications",
            "icon": "Code"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_title() {
        let req: CreateServiceRequest = serde_json::from_value(serde_json::json!({
            "title": "",
            "description": "Custom web applications",
            "icon": "Code"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_legacy_document_defaults() {
        // Documents written before the images/features fields existed must
        // still deserialize, with defaults applied.
        let doc = bson::doc! {
            "id": "svc-1",
            "title": "Web Development",
            "description": "Custom web applications",
            "icon": "Code",
            "created_at": bson::DateTime::now(),
            "updated_at": bson::DateTime::now(),
        };
        let service: Service = bson::from_document(doc).unwrap();
        assert!(service.images.is_empty());
        assert!(service.features.is_empty());
        assert_eq!(service.link_text.as_deref(), Some(DEFAULT_LINK_TEXT));
        assert!(service.active);
        assert_eq!(service.order, 0);
        assert!(service.image.is_none());
    }

    #[test]
    fn test_response_strips_internal_id_and_fills_defaults() {
        let now = Utc::now();
        let service = Service {
            object_id: Some(ObjectId::new()),
            id: "svc-1".to_string(),
            title: "Web Development".to_string(),
            description: "Custom web applications".to_string(),
            icon: "Code".to_string(),
            image: None,
            images: Vec::new(),
            link: None,
            link_text: None,
            features: Vec::new(),
            price: None,
            active: true,
            order: 0,
            created_at: now,
            updated_at: now,
        };
        let resp = ServiceResponse::from(service);
        assert_eq!(resp.link_text, DEFAULT_LINK_TEXT);

        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("object_id").is_none());
        // Defaults are emitted, not omitted
        assert_eq!(json["images"], serde_json::json!([]));
        assert_eq!(json["features"], serde_json::json!([]));
        assert_eq!(json["order"], 0);
        // Timestamps serialize as RFC 3339 strings
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn test_dual_image_fields_coexist() {
        let doc = bson::doc! {
            "id": "svc-2",
            "title": "Wedding Invitation Website",
            "description": "Elegant wedding invitations",
            "icon": "Heart",
            "image": "https://example.com/primary.jpg",
            "images": ["/uploads/services/a.png", "/uploads/services/b.png"],
            "created_at": bson::DateTime::now(),
            "updated_at": bson::DateTime::now(),
        };
        let service: Service = bson::from_document(doc).unwrap();
        assert_eq!(service.image.as_deref(), Some("https://example.com/primary.jpg"));
        assert_eq!(service.images.len(), 2);
    }
}
