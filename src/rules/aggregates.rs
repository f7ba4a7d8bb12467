//! Aggregate computations over adjusted salaries.
//!
//! Total, net-pool average, and highest amount. The average divides the
//! post-tax pool by the raw record count; adjustment never drops or adds
//! records, so the post-adjustment count equals the input count.

use rust_decimal::Decimal;

use crate::models::SalaryRecord;

/// Sums the amounts of a list of salary records.
pub fn total_salary(records: &[SalaryRecord]) -> Decimal {
    records.iter().map(|r| r.amount).sum()
}

/// Computes the net-pool average: `(total - tax) / count`.
///
/// Defined as zero when `count` is zero. The orchestrator never reaches
/// this with zero records because of the minimum-history gate, but the
/// function is total regardless.
///
/// # Example
///
/// ```
/// use compensation_engine::rules::average_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let average = average_salary(
///     Decimal::from_str("12000").unwrap(),
///     Decimal::from_str("840").unwrap(),
///     3,
/// );
/// assert_eq!(average, Decimal::from_str("3720").unwrap());
/// ```
pub fn average_salary(total: Decimal, tax: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total - tax) / Decimal::from(count)
}

/// Returns the highest amount in a list of salary records, or zero when
/// the list is empty.
pub fn highest_salary(records: &[SalaryRecord]) -> Decimal {
    records
        .iter()
        .map(|r| r.amount)
        .max()
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn records(amounts: &[&str]) -> Vec<SalaryRecord> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| SalaryRecord::new(dec(amount), (i as u32 % 12) + 1, 2025))
            .collect()
    }

    /// AGG-001: total sums all amounts
    #[test]
    fn test_total_sums_all_amounts() {
        let list = records(&["1000.00", "2000.50", "3000.25"]);
        assert_eq!(total_salary(&list), dec("6000.75"));
    }

    /// AGG-002: total of empty list is zero
    #[test]
    fn test_total_of_empty_list_is_zero() {
        assert_eq!(total_salary(&[]), Decimal::ZERO);
    }

    /// AGG-003: average divides the net pool by the raw count
    #[test]
    fn test_average_divides_net_pool_by_count() {
        // (12000 - 840) / 3 = 3720
        assert_eq!(average_salary(dec("12000"), dec("840"), 3), dec("3720"));
    }

    /// AGG-004: average with zero tax
    #[test]
    fn test_average_with_zero_tax() {
        assert_eq!(average_salary(dec("9000"), Decimal::ZERO, 3), dec("3000"));
    }

    /// AGG-005: average of zero count is zero
    #[test]
    fn test_average_of_zero_count_is_zero() {
        assert_eq!(average_salary(dec("12000"), dec("840"), 0), Decimal::ZERO);
    }

    /// AGG-006: average keeps fractional precision
    #[test]
    fn test_average_keeps_fractional_precision() {
        // (100 - 0) / 3 = 33.333...
        let average = average_salary(dec("100"), Decimal::ZERO, 3);
        assert_eq!(average.round_dp(4), dec("33.3333"));
    }

    /// AGG-007: highest picks the maximum amount
    #[test]
    fn test_highest_picks_maximum() {
        let list = records(&["1000.00", "5400.00", "3000.25"]);
        assert_eq!(highest_salary(&list), dec("5400.00"));
    }

    /// AGG-008: highest of empty list is zero
    #[test]
    fn test_highest_of_empty_list_is_zero() {
        assert_eq!(highest_salary(&[]), Decimal::ZERO);
    }

    /// AGG-009: highest with equal amounts
    #[test]
    fn test_highest_with_equal_amounts() {
        let list = records(&["2000.00", "2000.00"]);
        assert_eq!(highest_salary(&list), dec("2000.00"));
    }
}
