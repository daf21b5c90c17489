//! In-memory store implementation.
//!
//! Backs the engine in tests and demos. Attendance rows are keyed by
//! (employee, date) so writes are upserts, matching the uniqueness
//! invariant of the real schema.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::error::EngineResult;
use crate::models::{
    AdvanceRecord, AttendanceRecord, Employee, PayrollRecord, advance_total_for_month,
};

use super::PayrollStore;

/// An in-memory [`PayrollStore`].
#[derive(Default)]
pub struct MemoryStore {
    employees: RwLock<HashMap<u64, Employee>>,
    attendance: RwLock<HashMap<(u64, NaiveDate), AttendanceRecord>>,
    advances: RwLock<Vec<AdvanceRecord>>,
    payrolls: RwLock<HashMap<(u64, u32, i32), PayrollRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee.
    pub async fn put_employee(&self, employee: Employee) {
        self.employees.write().await.insert(employee.id, employee);
    }

    /// Upserts an attendance record, keyed by (employee, date).
    pub async fn upsert_attendance(&self, record: AttendanceRecord) {
        self.attendance
            .write()
            .await
            .insert((record.employee_id, record.attendance_date), record);
    }

    /// Appends an advance ledger entry.
    pub async fn add_advance(&self, advance: AdvanceRecord) {
        self.advances.write().await.push(advance);
    }

    /// Number of stored payroll records.
    pub async fn payroll_count(&self) -> usize {
        self.payrolls.read().await.len()
    }
}

impl PayrollStore for MemoryStore {
    async fn find_employee(&self, employee_id: u64) -> EngineResult<Option<Employee>> {
        Ok(self.employees.read().await.get(&employee_id).cloned())
    }

    async fn active_employees(&self) -> EngineResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self
            .employees
            .read()
            .await
            .values()
            .filter(|e| e.is_active)
            .cloned()
            .collect();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }

    async fn attendance_for_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut rows: Vec<AttendanceRecord> = self
            .attendance
            .read()
            .await
            .values()
            .filter(|r| {
                r.employee_id == employee_id
                    && r.attendance_date.month() == month
                    && r.attendance_date.year() == year
            })
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.attendance_date);
        Ok(rows)
    }

    async fn attendance_for_month_all(
        &self,
        month: u32,
        year: i32,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut rows: Vec<AttendanceRecord> = self
            .attendance
            .read()
            .await
            .values()
            .filter(|r| r.attendance_date.month() == month && r.attendance_date.year() == year)
            .cloned()
            .collect();
        rows.sort_by_key(|r| (r.employee_id, r.attendance_date));
        Ok(rows)
    }

    async fn advance_total_for_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> EngineResult<Decimal> {
        let advances = self.advances.read().await;
        Ok(advance_total_for_month(&advances, employee_id, month, year))
    }

    async fn advances_for_month_all(
        &self,
        month: u32,
        year: i32,
    ) -> EngineResult<Vec<AdvanceRecord>> {
        Ok(self
            .advances
            .read()
            .await
            .iter()
            .filter(|a| a.advance_date.month() == month && a.advance_date.year() == year)
            .cloned()
            .collect())
    }

    async fn find_payroll(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> EngineResult<Option<PayrollRecord>> {
        Ok(self
            .payrolls
            .read()
            .await
            .get(&(employee_id, month, year))
            .cloned())
    }

    async fn insert_payroll(&self, record: PayrollRecord) -> EngineResult<()> {
        self.payrolls
            .write()
            .await
            .insert((record.employee_id, record.month, record.year), record);
        Ok(())
    }

    async fn update_payroll(&self, record: PayrollRecord) -> EngineResult<()> {
        self.payrolls
            .write()
            .await
            .insert((record.employee_id, record.month, record.year), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, Department};

    fn employee(id: u64, is_active: bool) -> Employee {
        Employee {
            id,
            name: format!("employee {}", id),
            department: Department::Workshop,
            base_salary: Decimal::new(30000, 0),
            overtime_rate: Decimal::ZERO,
            overtime_wage: Decimal::ZERO,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_attendance_upsert_is_unique_per_day() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        store
            .upsert_attendance(AttendanceRecord::marked(1, date, AttendanceStatus::Absent))
            .await;
        store
            .upsert_attendance(AttendanceRecord::marked(1, date, AttendanceStatus::Present))
            .await;

        let rows = store.attendance_for_month(1, 3, 2026).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn test_attendance_filtered_by_month_and_employee() {
        let store = MemoryStore::new();
        for (id, date) in [
            (1, (2026, 3, 2)),
            (1, (2026, 4, 2)),
            (2, (2026, 3, 2)),
        ] {
            let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
            store
                .upsert_attendance(AttendanceRecord::marked(id, date, AttendanceStatus::Present))
                .await;
        }

        assert_eq!(store.attendance_for_month(1, 3, 2026).await.unwrap().len(), 1);
        assert_eq!(
            store.attendance_for_month_all(3, 2026).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_active_employees_excludes_inactive() {
        let store = MemoryStore::new();
        store.put_employee(employee(1, true)).await;
        store.put_employee(employee(2, false)).await;
        store.put_employee(employee(3, true)).await;

        let active = store.active_employees().await.unwrap();
        let ids: Vec<u64> = active.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_advance_totals_per_month() {
        let store = MemoryStore::new();
        for (day, amount) in [(2, 700), (20, 300)] {
            store
                .add_advance(AdvanceRecord {
                    employee_id: 1,
                    advance_date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
                    amount: Decimal::new(amount, 0),
                })
                .await;
        }

        assert_eq!(
            store.advance_total_for_month(1, 3, 2026).await.unwrap(),
            Decimal::new(1000, 0)
        );
        assert_eq!(
            store.advance_total_for_month(1, 4, 2026).await.unwrap(),
            Decimal::ZERO
        );
    }
}
