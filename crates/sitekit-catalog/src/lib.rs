//! Sitekit Catalog Module
//!
//! This module provides the services-catalog and contact-request backend
//! for the sitekit website-template store.
//!
//! # Features
//! - Service catalog management (create, update, delete, ordered listing)
//! - Customer contact requests with a status lifecycle
//! - Contact summary statistics
//! - Service image uploads
//! - MongoDB persistence

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use db::MongoDb;
pub use error::{CatalogError, CatalogResult};

/// Authenticated admin marker inserted by the auth middleware.
///
/// Carries the admin subject. The catalog core never verifies credentials
/// itself; it only requires that this extension is present on privileged
/// requests.
#[derive(Clone, Debug)]
pub struct AdminContext(pub String);

impl AdminContext {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
