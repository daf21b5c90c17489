//! Payroll generation and the recalculation trigger.
//!
//! [`PayrollEngine`] binds a store to the rules and calendar sources and
//! drives the salary calculation for persistence flows: explicit batch
//! generation, and the best-effort recalculation that runs whenever
//! attendance or advances change for an already-generated month.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::calculation::{BusinessCalendar, CalculationSession, calculate_salary};
use crate::config::RulesLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, PayrollRecord, SalaryBreakdown, advance_total_for_month};
use crate::store::PayrollStore;

/// The outcome of a recalculation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecalcOutcome {
    /// No payroll record exists for the key; nothing was written.
    ///
    /// Generation is an explicit, separate action; the trigger never
    /// creates records.
    NotGenerated,
    /// The existing record was recomputed and overwritten in place.
    Updated,
}

/// One failed employee in a batch payroll run.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollRunError {
    /// The employee the failure belongs to.
    pub employee_id: u64,
    /// The error message.
    pub message: String,
}

/// Aggregate result of a batch payroll run.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollRunSummary {
    /// Target month (1-12).
    pub month: u32,
    /// Target year.
    pub year: i32,
    /// Number of records generated or regenerated.
    pub generated: u32,
    /// Number of employees that failed.
    pub failed: u32,
    /// Per-employee failure details.
    pub errors: Vec<PayrollRunError>,
}

impl PayrollRunSummary {
    /// One-line report with the first few error messages surfaced.
    pub fn report(&self) -> String {
        if self.errors.is_empty() {
            return format!(
                "Generated {} payroll records for {}/{}",
                self.generated, self.month, self.year
            );
        }

        let first: Vec<&str> = self
            .errors
            .iter()
            .take(3)
            .map(|e| e.message.as_str())
            .collect();
        format!(
            "Generated {} payroll records for {}/{} ({} failed: {})",
            self.generated,
            self.month,
            self.year,
            self.failed,
            first.join("; ")
        )
    }
}

/// Drives salary calculations against a store.
///
/// The engine holds the process-lifetime reference-data sources; every
/// run builds a fresh [`CalculationSession`] so rule and calendar changes
/// between runs are always picked up.
pub struct PayrollEngine<S> {
    store: S,
    rules: Arc<RulesLoader>,
    calendar: Option<Arc<dyn BusinessCalendar>>,
}

impl<S: PayrollStore> PayrollEngine<S> {
    /// Creates an engine over a store and rules source.
    pub fn new(store: S, rules: Arc<RulesLoader>) -> Self {
        Self {
            store,
            rules,
            calendar: None,
        }
    }

    /// Attaches a business-calendar source.
    pub fn with_calendar(mut self, calendar: Arc<dyn BusinessCalendar>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn session(&self) -> CalculationSession {
        let session = CalculationSession::new(self.rules.clone());
        match &self.calendar {
            Some(calendar) => session.with_calendar(calendar.clone()),
            None => session,
        }
    }

    /// Fetches fresh inputs and computes one employee's breakdown.
    ///
    /// # Errors
    ///
    /// `EmployeeNotFound` when the employee cannot be resolved, plus any
    /// calculation or validation error.
    pub async fn calculate_for(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> EngineResult<SalaryBreakdown> {
        let employee = self
            .store
            .find_employee(employee_id)
            .await?
            .ok_or(EngineError::EmployeeNotFound { employee_id })?;
        let attendance = self.store.attendance_for_month(employee_id, month, year).await?;
        let advance_total = self
            .store
            .advance_total_for_month(employee_id, month, year)
            .await?;

        calculate_salary(
            &employee,
            month,
            year,
            &attendance,
            advance_total,
            &mut self.session(),
        )
    }

    /// Re-derives the payroll record for (employee, month, year) if one
    /// was already generated.
    ///
    /// Inputs are re-read fresh; the existing record is overwritten in
    /// place with a new update stamp. When no record exists this is a
    /// no-op: absence means "not yet generated".
    pub async fn recalculate(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> EngineResult<RecalcOutcome> {
        let Some(mut record) = self.store.find_payroll(employee_id, month, year).await? else {
            return Ok(RecalcOutcome::NotGenerated);
        };

        let breakdown = self.calculate_for(employee_id, month, year).await?;
        record.apply_breakdown(breakdown, Utc::now());
        self.store.update_payroll(record).await?;

        Ok(RecalcOutcome::Updated)
    }

    /// Generates (or regenerates) payroll records for every active
    /// employee in the given month.
    ///
    /// Attendance and advances are prefetched in two bulk queries and
    /// grouped in memory; employees are then processed sequentially. A
    /// single employee's failure is recorded and the loop continues.
    ///
    /// # Errors
    ///
    /// `NoEligibleEmployees` when there is no active employee; store
    /// errors on the up-front fetches. Per-employee failures never fail
    /// the batch.
    pub async fn generate_payroll(&self, month: u32, year: i32) -> EngineResult<PayrollRunSummary> {
        let employees = self.store.active_employees().await?;
        if employees.is_empty() {
            return Err(EngineError::NoEligibleEmployees { month, year });
        }

        let mut attendance_by_employee: HashMap<u64, Vec<AttendanceRecord>> = HashMap::new();
        for row in self.store.attendance_for_month_all(month, year).await? {
            attendance_by_employee
                .entry(row.employee_id)
                .or_default()
                .push(row);
        }
        let advances = self.store.advances_for_month_all(month, year).await?;

        let mut session = self.session();
        let mut summary = PayrollRunSummary {
            month,
            year,
            generated: 0,
            failed: 0,
            errors: Vec::new(),
        };

        for employee in &employees {
            let rows = attendance_by_employee
                .get(&employee.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let advance_total = advance_total_for_month(&advances, employee.id, month, year);

            let item: EngineResult<()> = async {
                let breakdown =
                    calculate_salary(employee, month, year, rows, advance_total, &mut session)?;
                let now = Utc::now();
                match self.store.find_payroll(employee.id, month, year).await? {
                    Some(mut record) => {
                        record.apply_breakdown(breakdown, now);
                        self.store.update_payroll(record).await?;
                    }
                    None => {
                        let record = PayrollRecord::from_breakdown(
                            employee.id,
                            month,
                            year,
                            breakdown,
                            now,
                        );
                        self.store.insert_payroll(record).await?;
                    }
                }
                Ok(())
            }
            .await;

            match item {
                Ok(()) => summary.generated += 1,
                Err(e) => {
                    warn!(
                        employee_id = employee.id,
                        employee = %employee.name,
                        error = %e,
                        "Payroll generation failed for employee"
                    );
                    summary.failed += 1;
                    summary.errors.push(PayrollRunError {
                        employee_id: employee.id,
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            month,
            year,
            generated = summary.generated,
            failed = summary.failed,
            "Payroll generation run finished"
        );
        Ok(summary)
    }
}

impl<S> PayrollEngine<S>
where
    S: PayrollStore + Send + Sync + 'static,
{
    /// Fires a recalculation as a detached task.
    ///
    /// The attendance or advance write that triggered the recalculation
    /// must never fail because of it: the task observes the outcome and
    /// logs failures instead of propagating them. The handle is returned
    /// so callers that want convergence (e.g. tests) can await it.
    pub fn spawn_recalculation(
        self: Arc<Self>,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> JoinHandle<()> {
        let engine = self;
        tokio::spawn(async move {
            match engine.recalculate(employee_id, month, year).await {
                Ok(RecalcOutcome::Updated) => {
                    info!(employee_id, month, year, "Payroll recalculated");
                }
                Ok(RecalcOutcome::NotGenerated) => {}
                Err(e) => {
                    warn!(
                        employee_id,
                        month,
                        year,
                        error = %e,
                        "Payroll recalculation failed"
                    );
                }
            }
        })
    }
}
