//! Data-access seam between the engine and the backing records.
//!
//! The engine reads and writes plain records through the [`PayrollStore`]
//! trait; the surrounding application decides what actually backs it.
//! Methods return `impl Future + Send` so the recalculation trigger can
//! run store operations from spawned tasks.

mod memory;

pub use memory::MemoryStore;

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AdvanceRecord, AttendanceRecord, Employee, PayrollRecord};

/// Read/write access to the records the engine consumes and produces.
///
/// All reads are point-in-time snapshots; the recalculation trigger
/// re-reads fresh state before every write rather than patching
/// incrementally.
pub trait PayrollStore {
    /// Looks up an employee by id.
    fn find_employee(
        &self,
        employee_id: u64,
    ) -> impl Future<Output = EngineResult<Option<Employee>>> + Send;

    /// Lists all active employees.
    fn active_employees(&self) -> impl Future<Output = EngineResult<Vec<Employee>>> + Send;

    /// Fetches one employee's attendance rows for a month.
    fn attendance_for_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> impl Future<Output = EngineResult<Vec<AttendanceRecord>>> + Send;

    /// Fetches every employee's attendance rows for a month in one query.
    ///
    /// Used by batch payroll generation to avoid one fetch per employee.
    fn attendance_for_month_all(
        &self,
        month: u32,
        year: i32,
    ) -> impl Future<Output = EngineResult<Vec<AttendanceRecord>>> + Send;

    /// Sums one employee's advances for a month.
    fn advance_total_for_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> impl Future<Output = EngineResult<Decimal>> + Send;

    /// Fetches every employee's advance entries for a month in one query.
    fn advances_for_month_all(
        &self,
        month: u32,
        year: i32,
    ) -> impl Future<Output = EngineResult<Vec<AdvanceRecord>>> + Send;

    /// Looks up the payroll record for (employee, month, year).
    fn find_payroll(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> impl Future<Output = EngineResult<Option<PayrollRecord>>> + Send;

    /// Inserts a newly generated payroll record.
    fn insert_payroll(
        &self,
        record: PayrollRecord,
    ) -> impl Future<Output = EngineResult<()>> + Send;

    /// Overwrites an existing payroll record in place (same key).
    fn update_payroll(
        &self,
        record: PayrollRecord,
    ) -> impl Future<Output = EngineResult<()>> + Send;
}
