//! Catalog service — CRUD and ordered listing over service offerings

use crate::db::{collections, MongoDb};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateServiceRequest, Service, UpdateServiceRequest, service::DEFAULT_LINK_TEXT};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use uuid::Uuid;
use validator::Validate;

pub struct CatalogService {
    db: MongoDb,
}

impl CatalogService {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    /// List all services sorted ascending by `order`.
    ///
    /// Ties on `order` fall back to the store's natural iteration order,
    /// which is not guaranteed stable. `max_results` caps the result set at
    /// the store-adapter boundary.
    pub async fn list(&self, max_results: i64) -> CatalogResult<Vec<Service>> {
        let coll = self.db.collection::<Service>(collections::SERVICES);
        let opts = FindOptions::builder()
            .sort(doc! { "order": 1 })
            .limit(max_results)
            .build();
        let cursor = coll.find(doc! {}, opts).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, service_id: &str) -> CatalogResult<Service> {
        let coll = self.db.collection::<Service>(collections::SERVICES);
        coll.find_one(doc! { "id": service_id }, None)
            .await?
            .ok_or_else(|| CatalogError::ServiceNotFound(service_id.to_string()))
    }

    /// Create a new service with a fresh uuid and server-assigned timestamps.
    pub async fn create(&self, req: CreateServiceRequest) -> CatalogResult<Service> {
        req.validate()?;
        let now = Utc::now();

        let service = Service {
            object_id: None,
            id: Uuid::new_v4().to_string(),
            title: req.title.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            icon: req.icon.unwrap_or_default(),
            image: req.image,
            images: req.images.unwrap_or_default(),
            link: req.link,
            link_text: Some(req.link_text.unwrap_or_else(|| DEFAULT_LINK_TEXT.to_string())),
            features: req.features.unwrap_or_default(),
            price: req.price,
            active: req.active.unwrap_or(true),
            order: req.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        let coll = self.db.collection::<Service>(collections::SERVICES);
        let result = coll.insert_one(&service, None).await?;

        let mut service = service;
        service.object_id = result.inserted_id.as_object_id();
        tracing::info!("Created service {} ({})", service.id, service.title);
        Ok(service)
    }

    /// Merge-update a service: only supplied fields are overwritten,
    /// `updated_at` is always refreshed.
    ///
    /// Concurrent updates race last-write-wins; no concurrency token is
    /// used (accepted limitation).
    pub async fn update(
        &self,
        service_id: &str,
        req: UpdateServiceRequest,
    ) -> CatalogResult<Service> {
        req.validate()?;
        let update = service_update_doc(&req, Utc::now());

        let coll = self.db.collection::<Service>(collections::SERVICES);
        let result = coll
            .update_one(doc! { "id": service_id }, doc! { "$set": update }, None)
            .await?;
        if result.matched_count == 0 {
            return Err(CatalogError::ServiceNotFound(service_id.to_string()));
        }

        self.get(service_id).await
    }

    /// Hard-delete a service. Contact requests referencing it are left in
    /// place as orphaned weak references (no cascade).
    pub async fn delete(&self, service_id: &str) -> CatalogResult<()> {
        let coll = self.db.collection::<Service>(collections::SERVICES);
        let result = coll.delete_one(doc! { "id": service_id }, None).await?;
        if result.deleted_count == 0 {
            return Err(CatalogError::ServiceNotFound(service_id.to_string()));
        }
        tracing::info!("Deleted service {}", service_id);
        Ok(())
    }
}

/// Build the `$set` document for a partial service update. Absent fields are
/// not touched; `updated_at` is always set.
fn service_update_doc(req: &UpdateServiceRequest, now: DateTime<Utc>) -> Document {
    let mut update = doc! { "updated_at": bson::DateTime::from_chrono(now) };

    if let Some(ref title) = req.title {
        update.insert("title", title);
    }
    if let Some(ref description) = req.description {
        update.insert("description", description);
    }
    if let Some(ref icon) = req.icon {
        update.insert("icon", icon);
    }
    if let Some(ref image) = req.image {
        update.insert("image", image);
    }
    if let Some(ref images) = req.images {
        update.insert("images", images);
    }
    if let Some(ref link) = req.link {
        update.insert("link", link);
    }
    if let Some(ref link_text) = req.link_text {
        update.insert("link_text", link_text);
    }
    if let Some(ref features) = req.features {
        update.insert("features", features);
    }
    if let Some(ref price) = req.price {
        update.insert("price", price);
    }
    if let Some(active) = req.active {
        update.insert("active", active);
    }
    if let Some(order) = req.order {
        update.insert("order", order);
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_doc_only_contains_supplied_fields() {
        let req = UpdateServiceRequest {
            title: Some("X".to_string()),
            ..Default::default()
        };
        let update = service_update_doc(&req, Utc::now());

        assert_eq!(update.get_str("title").unwrap(), "X");
        assert!(update.get("updated_at").is_some());
        assert_eq!(update.len(), 2);
    }

    #[test]
    fn test_update_doc_always_refreshes_updated_at() {
        let update = service_update_doc(&UpdateServiceRequest::default(), Utc::now());
        assert_eq!(update.len(), 1);
        assert!(update.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_update_doc_full() {
        let req = UpdateServiceRequest {
            title: Some("Web Dev".into()),
            description: Some("desc".into()),
            icon: Some("Code".into()),
            image: Some("/uploads/services/a.png".into()),
            images: Some(vec!["/uploads/services/a.png".into()]),
            link: Some("https://example.com".into()),
            link_text: Some("View Demo".into()),
            features: Some(vec!["Responsive".into(), "SEO".into()]),
            price: Some("₹2,999".into()),
            active: Some(false),
            order: Some(5),
        };
        let update = service_update_doc(&req, Utc::now());

        assert_eq!(update.get_i32("order").unwrap(), 5);
        assert!(!update.get_bool("active").unwrap());
        assert_eq!(update.get_array("features").unwrap().len(), 2);
        // 11 fields + updated_at
        assert_eq!(update.len(), 12);
    }

    #[test]
    fn test_update_request_rejects_empty_required_text() {
        let req = UpdateServiceRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
