//! Advance withdrawal ledger entries.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single advance withdrawal against a future salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceRecord {
    /// Identifier of the employee the advance was paid to.
    pub employee_id: u64,
    /// The date the advance was withdrawn.
    pub advance_date: NaiveDate,
    /// The amount withdrawn.
    pub amount: Decimal,
}

/// Sums an employee's advances for the given month and year.
///
/// Entries belonging to other employees or other months are ignored, so the
/// caller may pass an unfiltered ledger slice.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{AdvanceRecord, advance_total_for_month};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ledger = vec![
///     AdvanceRecord {
///         employee_id: 1,
///         advance_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
///         amount: Decimal::new(1000, 0),
///     },
///     AdvanceRecord {
///         employee_id: 1,
///         advance_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
///         amount: Decimal::new(500, 0),
///     },
/// ];
///
/// assert_eq!(
///     advance_total_for_month(&ledger, 1, 3, 2026),
///     Decimal::new(1000, 0)
/// );
/// ```
pub fn advance_total_for_month(
    advances: &[AdvanceRecord],
    employee_id: u64,
    month: u32,
    year: i32,
) -> Decimal {
    advances
        .iter()
        .filter(|a| {
            a.employee_id == employee_id
                && a.advance_date.month() == month
                && a.advance_date.year() == year
        })
        .map(|a| a.amount)
        .sum()
}
