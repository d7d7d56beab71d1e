pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService,
    data_service::DataService,
    storage::{FileStorage, LocalStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub data_service: DataService,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let storage = Arc::new(FileStorage::new(config.session_store_path.clone()));
        Self::with_storage(storage)
    }

    /// Seeded collections and accounts over the given session storage.
    pub fn with_storage(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            data_service: DataService::seeded(),
            auth_service: AuthService::new(storage),
        }
    }
}
