//! Tax computation.
//!
//! This module levies a flat tax on the adjusted salary total once it
//! exceeds the tax-free threshold.

use rust_decimal::Decimal;

/// Returns the tax-free threshold. Totals at or below this amount pay no
/// tax; the comparison is strictly greater-than.
pub fn tax_threshold() -> Decimal {
    Decimal::from(10_000)
}

/// Returns the flat tax rate applied above the threshold (7%).
pub fn tax_rate() -> Decimal {
    Decimal::new(7, 2)
}

/// Computes the tax on an adjusted salary total.
///
/// Returns `total * 0.07` when the total strictly exceeds the threshold,
/// and zero otherwise. A total of exactly 10000 pays no tax.
///
/// # Example
///
/// ```
/// use compensation_engine::rules::calculate_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = calculate_tax(Decimal::from_str("10000.01").unwrap());
/// assert_eq!(tax, Decimal::from_str("700.0007").unwrap());
/// ```
pub fn calculate_tax(total: Decimal) -> Decimal {
    if total > tax_threshold() {
        total * tax_rate()
    } else {
        Decimal::ZERO
    }
}
