//! Salary record model.
//!
//! This module defines the SalaryRecord struct representing one month of
//! salary history as supplied by the record store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a single month's salary for an employee.
///
/// Records are immutable once read; the rule engine's adjustment step
/// produces new records rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// The gross salary amount for the month.
    pub amount: Decimal,
    /// The calendar month, 1 through 12.
    pub month: u32,
    /// The calendar year, 2000 or later.
    pub year: i32,
}

impl SalaryRecord {
    /// Creates a new salary record.
    ///
    /// # Example
    ///
    /// ```
    /// use compensation_engine::models::SalaryRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = SalaryRecord::new(Decimal::new(520000, 2), 12, 2025);
    /// assert_eq!(record.month, 12);
    /// ```
    pub fn new(amount: Decimal, month: u32, year: i32) -> Self {
        Self {
            amount,
            month,
            year,
        }
    }

    /// Returns a copy of this record with a different amount.
    ///
    /// Used by the rule engine to produce adjusted records without touching
    /// the original.
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            month: self.month,
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_sets_all_fields() {
        let record = SalaryRecord::new(dec("5200.00"), 12, 2025);
        assert_eq!(record.amount, dec("5200.00"));
        assert_eq!(record.month, 12);
        assert_eq!(record.year, 2025);
    }

    #[test]
    fn test_with_amount_preserves_month_and_year() {
        let record = SalaryRecord::new(dec("5200.00"), 6, 2024);
        let adjusted = record.with_amount(dec("4940.00"));

        assert_eq!(adjusted.amount, dec("4940.00"));
        assert_eq!(adjusted.month, 6);
        assert_eq!(adjusted.year, 2024);
        // Original is untouched
        assert_eq!(record.amount, dec("5200.00"));
    }

    #[test]
    fn test_deserialize_salary_record() {
        let json = r#"{"amount": "5200.00", "month": 3, "year": 2025}"#;
        let record: SalaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount, dec("5200.00"));
        assert_eq!(record.month, 3);
        assert_eq!(record.year, 2025);
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = SalaryRecord::new(dec("4875.50"), 7, 2025);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: SalaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
