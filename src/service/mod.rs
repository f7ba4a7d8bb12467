//! Request orchestration for the Compensation Status Engine.
//!
//! This module composes the validator, cache layer, retry executor, record
//! store, and rule engine into the end-to-end status request flow.

mod orchestrator;

pub use orchestrator::StatusService;
