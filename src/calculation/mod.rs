//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: shift-duration
//! math, day tallies, overtime/undertime derivation and summation,
//! the per-run calculation session with its reference-data caches,
//! the salary calculation itself, and the business-rule checks that
//! gate every computed result.

mod hours;
mod salary;
mod session;
mod tally;
mod time;
mod validation;

pub use hours::{
    DerivedHours, HoursSummary, apply_derived_hours, derive_day_hours, effective_overtime_wage,
    sum_month_hours,
};
pub use salary::calculate_salary;
pub use session::{BusinessCalendar, CalculationSession};
pub use tally::{DayTally, tally_days};
pub use time::{calendar_days_in_month, format_iso_date, hours_worked, month_bounds};
pub use validation::{run_checks, violation_message};
