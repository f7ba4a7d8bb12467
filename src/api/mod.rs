//! HTTP API module for the Compensation Status Engine.
//!
//! This module provides the REST endpoints for computing an employee's
//! compensation status and for invalidating cached reports.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::ApiError;
pub use state::AppState;
