//! Contact service — CRUD, status lifecycle and summary statistics for
//! service contact requests

use crate::db::{collections, MongoDb};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    ContactStats, ContactStatus, CreateContactRequest, ServiceContact, UpdateContactRequest,
};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use uuid::Uuid;
use validator::Validate;

pub struct ContactService {
    db: MongoDb,
}

impl ContactService {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    /// Create a contact request from the public creation shape.
    ///
    /// `status` is always forced to `new` and `admin_notes` to null; the
    /// public contract cannot supply either. The denormalized
    /// `service_id`/`service_name` pair is trusted as given — no existence
    /// check against the catalog is performed.
    pub async fn create(&self, req: CreateContactRequest) -> CatalogResult<ServiceContact> {
        req.validate()?;
        let now = Utc::now();

        let contact = ServiceContact {
            object_id: None,
            id: Uuid::new_v4().to_string(),
            service_id: req.service_id.unwrap_or_default(),
            service_name: req.service_name.unwrap_or_default(),
            customer_name: req.customer_name.unwrap_or_default(),
            customer_email: req.customer_email.unwrap_or_default(),
            customer_phone: req.customer_phone.unwrap_or_default(),
            message: req.message.unwrap_or_default(),
            status: ContactStatus::New,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        };

        let coll = self
            .db
            .collection::<ServiceContact>(collections::SERVICE_CONTACTS);
        let result = coll.insert_one(&contact, None).await?;

        let mut contact = contact;
        contact.object_id = result.inserted_id.as_object_id();
        tracing::info!(
            "Created contact request {} for service {}",
            contact.id,
            contact.service_id
        );
        Ok(contact)
    }

    /// List contact requests, newest first, optionally filtered by status.
    pub async fn list(&self, status: Option<ContactStatus>) -> CatalogResult<Vec<ServiceContact>> {
        let filter = match status {
            Some(s) => doc! { "status": s.as_str() },
            None => doc! {},
        };
        let opts = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let coll = self
            .db
            .collection::<ServiceContact>(collections::SERVICE_CONTACTS);
        let cursor = coll.find(filter, opts).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get(&self, contact_id: &str) -> CatalogResult<ServiceContact> {
        let coll = self
            .db
            .collection::<ServiceContact>(collections::SERVICE_CONTACTS);
        coll.find_one(doc! { "id": contact_id }, None)
            .await?
            .ok_or_else(|| CatalogError::ContactNotFound(contact_id.to_string()))
    }

    /// Update a contact request: only `status` and/or `admin_notes` may
    /// change, each only when supplied. `updated_at` is always refreshed.
    pub async fn update(
        &self,
        contact_id: &str,
        req: UpdateContactRequest,
    ) -> CatalogResult<ServiceContact> {
        let current = self.get(contact_id).await?;

        if let Some(next) = req.status {
            // Open transition table: never fails today, kept explicit so a
            // future restriction has an obvious seam.
            if !current.status.can_transition_to(next) {
                return Err(CatalogError::Validation(format!(
                    "status transition {} -> {} is not permitted",
                    current.status.as_str(),
                    next.as_str()
                )));
            }
        }

        let update = contact_update_doc(&req, Utc::now());
        let coll = self
            .db
            .collection::<ServiceContact>(collections::SERVICE_CONTACTS);
        let result = coll
            .update_one(doc! { "id": contact_id }, doc! { "$set": update }, None)
            .await?;
        if result.matched_count == 0 {
            return Err(CatalogError::ContactNotFound(contact_id.to_string()));
        }

        self.get(contact_id).await
    }

    /// Hard-delete a contact request.
    pub async fn delete(&self, contact_id: &str) -> CatalogResult<()> {
        let coll = self
            .db
            .collection::<ServiceContact>(collections::SERVICE_CONTACTS);
        let result = coll.delete_one(doc! { "id": contact_id }, None).await?;
        if result.deleted_count == 0 {
            return Err(CatalogError::ContactNotFound(contact_id.to_string()));
        }
        tracing::info!("Deleted contact request {}", contact_id);
        Ok(())
    }

    /// Compute summary statistics over the full collection. Counts are
    /// always fresh; since `status` can only hold the four enumerated
    /// values, `total` equals the sum of the per-status counts.
    pub async fn summary_stats(&self) -> CatalogResult<ContactStats> {
        let coll = self
            .db
            .collection::<Document>(collections::SERVICE_CONTACTS);

        let total = coll.count_documents(doc! {}, None).await?;
        let mut by_status = [0u64; 4];
        for (i, status) in ContactStatus::ALL.iter().enumerate() {
            by_status[i] = coll
                .count_documents(doc! { "status": status.as_str() }, None)
                .await?;
        }

        Ok(ContactStats {
            total,
            new: by_status[0],
            contacted: by_status[1],
            converted: by_status[2],
            closed: by_status[3],
        })
    }
}

/// Build the `$set` document for a partial contact update. Only `status`
/// and `admin_notes` are writable; `updated_at` is always set.
fn contact_update_doc(req: &UpdateContactRequest, now: DateTime<Utc>) -> Document {
    let mut update = doc! { "updated_at": bson::DateTime::from_chrono(now) };

    if let Some(status) = req.status {
        update.insert("status", status.as_str());
    }
    if let Some(ref notes) = req.admin_notes {
        update.insert("admin_notes", notes);
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_doc_status_only() {
        let req = UpdateContactRequest {
            status: Some(ContactStatus::Converted),
            admin_notes: None,
        };
        let update = contact_update_doc(&req, Utc::now());

        assert_eq!(update.get_str("status").unwrap(), "converted");
        assert!(update.get("admin_notes").is_none());
        assert!(update.get_datetime("updated_at").is_ok());
        assert_eq!(update.len(), 2);
    }

    #[test]
    fn test_update_doc_notes_only() {
        let req = UpdateContactRequest {
            status: None,
            admin_notes: Some("called back, interested".to_string()),
        };
        let update = contact_update_doc(&req, Utc::now());

        assert!(update.get("status").is_none());
        assert_eq!(
            update.get_str("admin_notes").unwrap(),
            "called back, interested"
        );
        assert_eq!(update.len(), 2);
    }

    #[test]
    fn test_update_doc_empty_still_touches_updated_at() {
        let update = contact_update_doc(&UpdateContactRequest::default(), Utc::now());
        assert_eq!(update.len(), 1);
        assert!(update.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_update_doc_cannot_write_immutable_fields() {
        // The merge document is derived only from the admin update shape:
        // customer and identity fields can never appear in it.
        let req = UpdateContactRequest {
            status: Some(ContactStatus::Closed),
            admin_notes: Some("done".to_string()),
        };
        let update = contact_update_doc(&req, Utc::now());
        for field in [
            "id",
            "service_id",
            "service_name",
            "customer_name",
            "customer_email",
            "customer_phone",
            "created_at",
        ] {
            assert!(update.get(field).is_none(), "{} must be immutable", field);
        }
    }
}
