//! Domain models for the payroll calculation engine.
//!
//! This module contains the strongly-typed records that cross the data
//! boundary: employees, attendance rows, advance ledger entries, persisted
//! payroll records, and the salary breakdown produced by a calculation.

mod advance;
mod attendance;
mod breakdown;
mod employee;
mod payroll;

pub use advance::{AdvanceRecord, advance_total_for_month};
pub use attendance::{AttendanceRecord, AttendanceStatus, ShiftType};
pub use breakdown::{CalculationDetails, OvertimeWageSource, RuleCheck, SalaryBreakdown};
pub use employee::{Department, Employee};
pub use payroll::PayrollRecord;
