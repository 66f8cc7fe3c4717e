//! Data models for the catalog module

pub mod service;
pub mod service_contact;

pub use service::{CreateServiceRequest, Service, ServiceResponse, UpdateServiceRequest};
pub use service_contact::{
    ContactResponse, ContactStats, ContactStatus, CreateContactRequest, ServiceContact,
    UpdateContactRequest,
};
