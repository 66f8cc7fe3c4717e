//! Service contact request model — customer inquiries tied to a service

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Status lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle status of a contact request.
///
/// The transition table is deliberately open: any status is reachable from
/// any other, matching how admins actually work the queue (a closed request
/// can be reopened). Whether `closed -> new` should stay legal is an open
/// product question; restricting it is a one-line change in
/// [`ContactStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Contacted,
    Converted,
    Closed,
}

impl ContactStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::New,
        ContactStatus::Contacted,
        ContactStatus::Converted,
        ContactStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Contacted => "contacted",
            ContactStatus::Converted => "converted",
            ContactStatus::Closed => "closed",
        }
    }

    /// Whether a transition to `next` is permitted. Every transition is
    /// currently allowed, including re-entry into the same status.
    pub fn can_transition_to(&self, _next: ContactStatus) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// ServiceContact (stored shape)
// ---------------------------------------------------------------------------

/// A contact request as stored in MongoDB.
///
/// `service_id`/`service_name` are a weak, denormalized reference: the
/// service may have been deleted since, and no referential integrity is
/// enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceContact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: String,
    pub service_id: String,
    pub service_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Public creation shape. Note the absence of `status` and `admin_notes`:
/// the public contract cannot set them, creation always stores
/// `status = new` and `admin_notes = null`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(required, length(min = 1, message = "service_id is required"))]
    pub service_id: Option<String>,
    #[validate(required, length(min = 1, message = "service_name is required"))]
    pub service_name: Option<String>,
    #[validate(required, length(min = 1, message = "customer_name is required"))]
    pub customer_name: Option<String>,
    #[validate(required, email(message = "customer_email must be a valid email address"))]
    pub customer_email: Option<String>,
    #[validate(required, length(min = 1, message = "customer_phone is required"))]
    pub customer_phone: Option<String>,
    pub message: Option<String>,
}

/// Admin update shape: only `status` and `admin_notes` can ever change.
/// Identity, customer and denormalized service fields are immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContactRequest {
    pub status: Option<ContactStatus>,
    pub admin_notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Public shape of a contact request (internal `_id` stripped, RFC 3339
/// timestamps).
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: String,
    pub service_id: String,
    pub service_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub message: String,
    pub status: ContactStatus,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceContact> for ContactResponse {
    fn from(c: ServiceContact) -> Self {
        Self {
            id: c.id,
            service_id: c.service_id,
            service_name: c.service_name,
            customer_name: c.customer_name,
            customer_email: c.customer_email,
            customer_phone: c.customer_phone,
            message: c.message,
            status: c.status,
            admin_notes: c.admin_notes,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Summary statistics over the whole contacts collection.
/// Invariant: `total == new + contacted + converted + closed`.
#[derive(Debug, Clone, Serialize)]
pub struct ContactStats {
    pub total: u64,
    pub new: u64,
    pub contacted: u64,
    pub converted: u64,
    pub closed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_roundtrip() {
        for status in ContactStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: ContactStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
        assert!(serde_json::from_str::<ContactStatus>("\"archived\"").is_err());
    }

    #[test]
    fn test_open_transition_table() {
        for from in ContactStatus::ALL {
            for to in ContactStatus::ALL {
                assert!(from.can_transition_to(to), "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn test_default_status_is_new() {
        assert_eq!(ContactStatus::default(), ContactStatus::New);
    }

    #[test]
    fn test_public_creation_shape_has_no_privileged_fields() {
        // Caller-supplied status/admin_notes must have no effect: the shape
        // simply does not carry them.
        let req: CreateContactRequest = serde_json::from_value(serde_json::json!({
            "service_id": "s1",
            "service_name": "Web Dev",
            "customer_name": "Jane",
            "customer_email": "jane@x.com",
            "customer_phone": "+1-555-0100",
            "status": "converted",
            "admin_notes": "sneaky"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        // Only the declared fields survive deserialization
        assert_eq!(req.message, None);
    }

    #[test]
    fn test_email_validation() {
        let mut req = CreateContactRequest {
            service_id: Some("s1".into()),
            service_name: Some("Web Dev".into()),
            customer_name: Some("Jane".into()),
            customer_email: Some("not-an-email".into()),
            customer_phone: Some("+1-555-0100".into()),
            message: None,
        };
        assert!(req.validate().is_err());

        req.customer_email = Some("jane@x.com".into());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails_validation() {
        let req: CreateContactRequest = serde_json::from_value(serde_json::json!({
            "service_id": "s1",
            "service_name": "Web Dev",
            "customer_name": "Jane",
            "customer_email": "jane@x.com"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_stored_document_defaults() {
        let doc = bson::doc! {
            "id": "c1",
            "service_id": "s1",
            "service_name": "Web Dev",
            "customer_name": "Jane",
            "customer_email": "jane@x.com",
            "customer_phone": "+1-555-0100",
            "created_at": bson::DateTime::now(),
            "updated_at": bson::DateTime::now(),
        };
        let contact: ServiceContact = bson::from_document(doc).unwrap();
        assert_eq!(contact.status, ContactStatus::New);
        assert_eq!(contact.message, "");
        assert!(contact.admin_notes.is_none());
    }
}
