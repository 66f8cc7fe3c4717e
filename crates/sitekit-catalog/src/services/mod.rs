//! Service layer for the catalog module

pub mod catalog_service;
pub mod contact_service;
pub mod upload_service;

pub use catalog_service::CatalogService;
pub use contact_service::ContactService;
pub use upload_service::UploadService;
