//! Status classification.
//!
//! This module maps a net-pool average salary onto the GREEN / ORANGE / RED
//! status bands. Boundaries are inclusive on the lower edge of each band.

use rust_decimal::Decimal;

use crate::models::SalaryStatus;

/// Returns the lower bound of the GREEN band.
pub fn green_threshold() -> Decimal {
    Decimal::from(5_000)
}

/// Returns the lower bound of the ORANGE band.
pub fn orange_threshold() -> Decimal {
    Decimal::from(3_000)
}

/// Classifies an average salary into a status band.
///
/// `average >= 5000` is GREEN, `3000 <= average < 5000` is ORANGE, and
/// anything below 3000 is RED.
///
/// # Example
///
/// ```
/// use compensation_engine::models::SalaryStatus;
/// use compensation_engine::rules::classify;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify(Decimal::from(5000)), SalaryStatus::Green);
/// assert_eq!(classify(Decimal::from(3000)), SalaryStatus::Orange);
/// assert_eq!(classify(Decimal::from(2999)), SalaryStatus::Red);
/// ```
pub fn classify(average: Decimal) -> SalaryStatus {
    if average >= green_threshold() {
        SalaryStatus::Green
    } else if average >= orange_threshold() {
        SalaryStatus::Orange
    } else {
        SalaryStatus::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// CS-001: boundary just below orange is red
    #[test]
    fn test_just_below_orange_is_red() {
        assert_eq!(classify(dec("2999.99")), SalaryStatus::Red);
    }

    /// CS-002: orange lower bound is inclusive
    #[test]
    fn test_orange_lower_bound_is_inclusive() {
        assert_eq!(classify(dec("3000.00")), SalaryStatus::Orange);
    }

    /// CS-003: boundary just below green is orange
    #[test]
    fn test_just_below_green_is_orange() {
        assert_eq!(classify(dec("4999.99")), SalaryStatus::Orange);
    }

    /// CS-004: green lower bound is inclusive
    #[test]
    fn test_green_lower_bound_is_inclusive() {
        assert_eq!(classify(dec("5000.00")), SalaryStatus::Green);
    }

    /// CS-005: extremes classify sensibly
    #[test]
    fn test_extremes() {
        assert_eq!(classify(Decimal::ZERO), SalaryStatus::Red);
        assert_eq!(classify(dec("1000000")), SalaryStatus::Green);
    }

    #[test]
    fn test_thresholds_are_exact() {
        assert_eq!(green_threshold(), dec("5000"));
        assert_eq!(orange_threshold(), dec("3000"));
    }

    proptest! {
        /// Every average lands in exactly the band its value dictates.
        #[test]
        fn prop_bands_are_total_and_exclusive(cents in 0i64..1_000_000_00) {
            let average = Decimal::new(cents, 2);
            let status = classify(average);

            if average >= dec("5000") {
                prop_assert_eq!(status, SalaryStatus::Green);
            } else if average >= dec("3000") {
                prop_assert_eq!(status, SalaryStatus::Orange);
            } else {
                prop_assert_eq!(status, SalaryStatus::Red);
            }
        }
    }
}
