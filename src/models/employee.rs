//! Employee record model.
//!
//! This module defines the EmployeeRecord struct representing the read-only
//! copy of an employee row held for the duration of one request.

use serde::{Deserialize, Serialize};

/// Represents an employee as supplied by the record store.
///
/// The record store owns this data; the engine holds a read-only copy per
/// request and never writes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee within the record store.
    pub id: String,
    /// The employee's login/display name.
    pub username: String,
    /// The unique identifying key, format three letters + four digits
    /// (e.g., "NAT1001").
    pub national_key: String,
    /// The employee's email address.
    pub email: String,
    /// The employee's phone number.
    pub phone: String,
    /// Whether the employee is currently active.
    pub is_active: bool,
}
