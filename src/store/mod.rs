//! Record store collaborator interface.
//!
//! The record store owns employee records and their salary histories. The
//! engine consumes it through the [`RecordStore`] trait and only ever calls
//! it through the retry executor; any backing implementation (SQL, remote
//! service, in-memory fixture) can stand behind the trait.

mod memory;

pub use memory::InMemoryRecordStore;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, SalaryRecord};

/// Read-only access to employee records and salary histories.
///
/// Both operations are fallible with [`crate::error::EngineError::DataAccessFailure`];
/// absence of a record is not a failure and is reported as `None`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Looks up an employee by national key.
    ///
    /// Lookup is performed with the canonical (trimmed, uppercased) key.
    async fn find_by_key(&self, national_key: &str) -> EngineResult<Option<EmployeeRecord>>;

    /// Lists the salary history for an employee.
    ///
    /// Records are returned newest-first by year then month so responses
    /// are reproducible.
    async fn list_salaries(&self, employee_id: &str) -> EngineResult<Vec<SalaryRecord>>;
}
