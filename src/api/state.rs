//! Application state for the Compensation Status Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::StatusService;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// primarily the status service composing the cache, retry executor,
/// and record store.
#[derive(Clone)]
pub struct AppState {
    /// The orchestrating service.
    service: Arc<StatusService>,
}

impl AppState {
    /// Creates a new application state around a status service.
    pub fn new(service: StatusService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the status service.
    pub fn service(&self) -> &StatusService {
        &self.service
    }
}
