//! Salary rule engine for the Compensation Status Engine.
//!
//! This module contains the deterministic, order-sensitive pipeline applied
//! to a salary history: December bonus and summer deduction adjustments,
//! total and tax computation, net-pool averaging, highest-salary lookup,
//! and status classification. All steps are pure and perform no I/O.

mod adjustments;
mod aggregates;
mod classification;
mod tax;

pub use adjustments::{
    DECEMBER_MONTH, SUMMER_MONTHS, adjust_record, apply_adjustments, december_bonus_multiplier,
    is_summer_month, summer_deduction_multiplier,
};
pub use aggregates::{average_salary, highest_salary, total_salary};
pub use classification::{classify, green_threshold, orange_threshold};
pub use tax::{calculate_tax, tax_rate, tax_threshold};

use rust_decimal::Decimal;

use crate::models::{SalaryRecord, SalaryStatus};

/// The complete output of one rule-engine evaluation.
///
/// `adjusted` has the same length and ordering as the input list; `status`
/// is a pure function of `average`, which in turn is a pure function of
/// `total`, `tax`, and the record count.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryComputation {
    /// The salary records after adjustment, in input order.
    pub adjusted: Vec<SalaryRecord>,
    /// The sum of the adjusted amounts.
    pub total: Decimal,
    /// The tax levied on the adjusted total.
    pub tax: Decimal,
    /// The net-pool average: (total - tax) / record count.
    pub average: Decimal,
    /// The highest adjusted amount.
    pub highest: Decimal,
    /// The status band derived from the average.
    pub status: SalaryStatus,
}

/// Runs the full salary pipeline over a list of records.
///
/// The steps run in a fixed order: adjustments (December bonus, then summer
/// deduction), total, tax, average, highest, classification.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{SalaryRecord, SalaryStatus};
/// use compensation_engine::rules::evaluate;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     SalaryRecord::new(Decimal::new(600000, 2), 1, 2025),
///     SalaryRecord::new(Decimal::new(600000, 2), 2, 2025),
///     SalaryRecord::new(Decimal::new(600000, 2), 3, 2025),
/// ];
/// let computation = evaluate(&records);
/// assert_eq!(computation.status, SalaryStatus::Green);
/// ```
pub fn evaluate(records: &[SalaryRecord]) -> SalaryComputation {
    let adjusted = apply_adjustments(records);
    let total = total_salary(&adjusted);
    let tax = calculate_tax(total);
    let average = average_salary(total, tax, adjusted.len());
    let highest = highest_salary(&adjusted);
    let status = classify(average);

    SalaryComputation {
        adjusted,
        total,
        tax,
        average,
        highest,
        status,
    }
}
