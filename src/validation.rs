//! Syntactic validation for the Compensation Status Engine.
//!
//! This module provides the pure predicates applied before any computation:
//! national-key format, minimum salary history, the active flag, and the
//! shape of raw salary records. No function here performs I/O.

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryRecord;

/// The minimum number of salary records required before a status can be
/// computed.
pub const MINIMUM_SALARY_HISTORY: usize = 3;

/// The earliest year accepted on a salary record.
pub const EARLIEST_SALARY_YEAR: i32 = 2000;

/// Validates the national key format.
///
/// A key is valid iff, after trimming surrounding whitespace, it consists of
/// exactly three ASCII letters (either case) followed by exactly four ASCII
/// digits. Empty input is invalid.
///
/// # Example
///
/// ```
/// use compensation_engine::validation::validate_key_format;
///
/// assert!(validate_key_format("NAT1001"));
/// assert!(validate_key_format("  nat1001  "));
/// assert!(!validate_key_format("NAT100"));
/// assert!(!validate_key_format(""));
/// ```
pub fn validate_key_format(key: &str) -> bool {
    let key = key.trim();
    let chars: Vec<char> = key.chars().collect();
    if chars.len() != 7 {
        return false;
    }
    chars[..3].iter().all(|c| c.is_ascii_alphabetic())
        && chars[3..].iter().all(|c| c.is_ascii_digit())
}

/// Returns true iff the salary history is long enough to compute a status.
pub fn has_minimum_history(count: usize) -> bool {
    count >= MINIMUM_SALARY_HISTORY
}

/// Returns true iff the employee's active flag is set.
///
/// The flag is checked strictly; there is no coercion from any other
/// representation of truthiness.
pub fn is_active(flag: bool) -> bool {
    flag
}

/// Validates the shape of raw salary records.
///
/// Every record must carry a non-negative amount, a month in 1..=12, and a
/// year of 2000 or later. Validation short-circuits on the first violation
/// with a reason naming the offending record position and field.
///
/// # Example
///
/// ```
/// use compensation_engine::models::SalaryRecord;
/// use compensation_engine::validation::validate_salary_shape;
/// use rust_decimal::Decimal;
///
/// let records = vec![SalaryRecord::new(Decimal::new(500000, 2), 13, 2025)];
/// assert!(validate_salary_shape(&records).is_err());
/// ```
pub fn validate_salary_shape(records: &[SalaryRecord]) -> EngineResult<()> {
    for (index, record) in records.iter().enumerate() {
        if record.amount.is_sign_negative() {
            return Err(EngineError::InvalidInput {
                message: format!(
                    "salary record {} has a negative amount: {}",
                    index, record.amount
                ),
            });
        }
        if record.month < 1 || record.month > 12 {
            return Err(EngineError::InvalidInput {
                message: format!(
                    "salary record {} has an invalid month: {} (expected 1-12)",
                    index, record.month
                ),
            });
        }
        if record.year < EARLIEST_SALARY_YEAR {
            return Err(EngineError::InvalidInput {
                message: format!(
                    "salary record {} has an invalid year: {} (expected {} or later)",
                    index, record.year, EARLIEST_SALARY_YEAR
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// VK-001: canonical key is valid
    #[test]
    fn test_canonical_key_is_valid() {
        assert!(validate_key_format("NAT1001"));
    }

    /// VK-002: lowercase letters are accepted
    #[test]
    fn test_lowercase_key_is_valid() {
        assert!(validate_key_format("nat1001"));
        assert!(validate_key_format("nAt1001"));
    }

    /// VK-003: surrounding whitespace is trimmed
    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(validate_key_format("  NAT1001"));
        assert!(validate_key_format("NAT1001  "));
        assert!(validate_key_format("\tNAT1001\n"));
    }

    /// VK-004: empty input is invalid
    #[test]
    fn test_empty_key_is_invalid() {
        assert!(!validate_key_format(""));
        assert!(!validate_key_format("   "));
    }

    /// VK-005: wrong lengths are invalid
    #[test]
    fn test_wrong_length_is_invalid() {
        assert!(!validate_key_format("NAT100"));
        assert!(!validate_key_format("NAT10011"));
        assert!(!validate_key_format("NOTFOUND9"));
    }

    /// VK-006: digits and letters out of position are invalid
    #[test]
    fn test_wrong_positions_are_invalid() {
        assert!(!validate_key_format("1NAT001"));
        assert!(!validate_key_format("NATA001"));
        assert!(!validate_key_format("NA11001"));
        assert!(!validate_key_format("NAT100A"));
    }

    /// VK-007: non-ascii lookalikes are invalid
    #[test]
    fn test_non_ascii_is_invalid() {
        assert!(!validate_key_format("ÑAT1001"));
        assert!(!validate_key_format("NAT１００１"));
    }

    /// VK-008: interior whitespace is invalid
    #[test]
    fn test_interior_whitespace_is_invalid() {
        assert!(!validate_key_format("NAT 001"));
        assert!(!validate_key_format("NA T1001"));
    }

    #[test]
    fn test_minimum_history_boundary() {
        assert!(!has_minimum_history(0));
        assert!(!has_minimum_history(2));
        assert!(has_minimum_history(3));
        assert!(has_minimum_history(12));
    }

    #[test]
    fn test_is_active_is_strict() {
        assert!(is_active(true));
        assert!(!is_active(false));
    }

    /// VS-001: well-formed records pass
    #[test]
    fn test_well_formed_records_pass() {
        let records = vec![
            SalaryRecord::new(dec("5200.00"), 1, 2025),
            SalaryRecord::new(dec("0"), 12, 2000),
        ];
        assert!(validate_salary_shape(&records).is_ok());
    }

    /// VS-002: empty list passes shape validation
    #[test]
    fn test_empty_list_passes_shape_validation() {
        // The history-minimum gate is a separate check
        assert!(validate_salary_shape(&[]).is_ok());
    }

    /// VS-003: negative amount is rejected
    #[test]
    fn test_negative_amount_is_rejected() {
        let records = vec![
            SalaryRecord::new(dec("5200.00"), 1, 2025),
            SalaryRecord::new(dec("-0.01"), 2, 2025),
        ];
        let err = validate_salary_shape(&records).unwrap_err();
        match err {
            crate::error::EngineError::InvalidInput { message } => {
                assert!(message.contains("record 1"));
                assert!(message.contains("negative amount"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// VS-004: month out of range is rejected
    #[test]
    fn test_month_out_of_range_is_rejected() {
        for month in [0, 13] {
            let records = vec![SalaryRecord::new(dec("5200.00"), month, 2025)];
            let err = validate_salary_shape(&records).unwrap_err();
            match err {
                crate::error::EngineError::InvalidInput { message } => {
                    assert!(message.contains("invalid month"));
                }
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    /// VS-005: year before 2000 is rejected
    #[test]
    fn test_year_before_2000_is_rejected() {
        let records = vec![SalaryRecord::new(dec("5200.00"), 6, 1999)];
        let err = validate_salary_shape(&records).unwrap_err();
        match err {
            crate::error::EngineError::InvalidInput { message } => {
                assert!(message.contains("invalid year"));
                assert!(message.contains("1999"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// VS-006: first violation wins
    #[test]
    fn test_first_violation_short_circuits() {
        let records = vec![
            SalaryRecord::new(dec("-1"), 1, 2025),
            SalaryRecord::new(dec("5200.00"), 0, 1999),
        ];
        let err = validate_salary_shape(&records).unwrap_err();
        match err {
            crate::error::EngineError::InvalidInput { message } => {
                assert!(message.contains("record 0"));
                assert!(message.contains("negative amount"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// VS-007: boundary months and years pass
    #[test]
    fn test_boundary_months_and_years_pass() {
        let records = vec![
            SalaryRecord::new(dec("5200.00"), 1, 2000),
            SalaryRecord::new(dec("5200.00"), 12, 2000),
        ];
        assert!(validate_salary_shape(&records).is_ok());
    }
}
