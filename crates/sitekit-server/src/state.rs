//! Shared application state for the server

use crate::config::Config;
use sitekit_catalog::MongoDb;
use std::sync::Arc;

/// Server-level state: database handle plus the immutable configuration
/// loaded at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<MongoDb>,
    pub config: Config,
}
