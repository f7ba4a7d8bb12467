//! In-memory record store.
//!
//! A seedable fixture implementation of [`RecordStore`] used by tests,
//! benchmarks, and demos.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, SalaryRecord};

use super::RecordStore;

/// An in-memory [`RecordStore`] backed by hash maps.
///
/// Employees are keyed by their canonical national key, salary histories by
/// employee id. The store is immutable after construction, so lookups take
/// `&self` with no locking.
///
/// # Example
///
/// ```
/// use compensation_engine::store::InMemoryRecordStore;
///
/// let store = InMemoryRecordStore::seeded();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    employees: HashMap<String, EmployeeRecord>,
    salaries: HashMap<String, Vec<SalaryRecord>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee and their salary history.
    ///
    /// The employee is indexed under the uppercased national key.
    pub fn with_employee(
        mut self,
        record: EmployeeRecord,
        salaries: Vec<SalaryRecord>,
    ) -> Self {
        self.salaries.insert(record.id.clone(), salaries);
        self.employees
            .insert(record.national_key.to_ascii_uppercase(), record);
        self
    }

    /// Creates a store seeded with the standard demo employees:
    ///
    /// - `NAT1001` — active, 12 months of history, classifies GREEN.
    /// - `NAT1002` — active, 6 months of history, classifies ORANGE.
    /// - `NAT1003` — inactive.
    /// - `NAT1005` — active but only 2 months of history.
    pub fn seeded() -> Self {
        let monthly = |amount: Decimal, months: std::ops::RangeInclusive<u32>, year: i32| {
            months
                .map(|month| SalaryRecord::new(amount, month, year))
                .collect::<Vec<_>>()
        };

        Self::new()
            .with_employee(
                EmployeeRecord {
                    id: "emp-1001".to_string(),
                    username: "jsmith".to_string(),
                    national_key: "NAT1001".to_string(),
                    email: "jsmith@example.com".to_string(),
                    phone: "+61 400 000 001".to_string(),
                    is_active: true,
                },
                monthly(Decimal::new(5_600_00, 2), 1..=12, 2025),
            )
            .with_employee(
                EmployeeRecord {
                    id: "emp-1002".to_string(),
                    username: "akaur".to_string(),
                    national_key: "NAT1002".to_string(),
                    email: "akaur@example.com".to_string(),
                    phone: "+61 400 000 002".to_string(),
                    is_active: true,
                },
                monthly(Decimal::new(4_000_00, 2), 1..=6, 2025),
            )
            .with_employee(
                EmployeeRecord {
                    id: "emp-1003".to_string(),
                    username: "mlee".to_string(),
                    national_key: "NAT1003".to_string(),
                    email: "mlee@example.com".to_string(),
                    phone: "+61 400 000 003".to_string(),
                    is_active: false,
                },
                monthly(Decimal::new(5_000_00, 2), 1..=4, 2025),
            )
            .with_employee(
                EmployeeRecord {
                    id: "emp-1005".to_string(),
                    username: "tnguyen".to_string(),
                    national_key: "NAT1005".to_string(),
                    email: "tnguyen@example.com".to_string(),
                    phone: "+61 400 000 005".to_string(),
                    is_active: true,
                },
                monthly(Decimal::new(5_200_00, 2), 1..=2, 2025),
            )
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_by_key(&self, national_key: &str) -> EngineResult<Option<EmployeeRecord>> {
        Ok(self
            .employees
            .get(&national_key.trim().to_ascii_uppercase())
            .cloned())
    }

    async fn list_salaries(&self, employee_id: &str) -> EngineResult<Vec<SalaryRecord>> {
        let mut records = self
            .salaries
            .get(employee_id)
            .cloned()
            .unwrap_or_default();
        records.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
        Ok(records)
    }
}
