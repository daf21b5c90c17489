//! Persisted payroll record.
//!
//! One record exists per (employee, month, year). Records are created by an
//! explicit payroll-generation action and subsequently kept in sync by the
//! recalculation trigger; they are never hand-edited.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakdown::{CalculationDetails, SalaryBreakdown};

/// The persisted projection of a [`SalaryBreakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Identifier of the employee this record belongs to.
    pub employee_id: u64,
    /// Target month (1-12).
    pub month: u32,
    /// Target year.
    pub year: i32,
    /// Base monthly salary at generation time.
    pub base_salary: Decimal,
    /// Authoritative days in the month.
    pub total_days: u32,
    /// Days marked present.
    pub present_days: u32,
    /// Days marked absent.
    pub absent_days: u32,
    /// Days on approved leave.
    pub leave_days: u32,
    /// Declared holidays.
    pub holiday_days: u32,
    /// Total overtime hours.
    pub overtime_hours: Decimal,
    /// Total undertime hours.
    pub undertime_hours: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Undertime deduction. Serialized as `absence_deduction`: the
    /// persisted schema kept the legacy column name even though absence is
    /// never charged as a monetary deduction.
    #[serde(rename = "absence_deduction")]
    pub undertime_deduction: Decimal,
    /// Total advances deducted for the month.
    pub advance_amount: Decimal,
    /// Earned salary before overtime and deductions.
    pub earned_salary: Decimal,
    /// Final payable salary.
    pub final_salary: Decimal,
    /// Supporting figures and rule-check results.
    pub details: CalculationDetails,
    /// When the record was first generated.
    pub generated_at: DateTime<Utc>,
    /// When the record was last recomputed.
    pub updated_at: DateTime<Utc>,
}

impl PayrollRecord {
    /// Projects a breakdown into a new record for the given key.
    pub fn from_breakdown(
        employee_id: u64,
        month: u32,
        year: i32,
        breakdown: SalaryBreakdown,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id,
            month,
            year,
            base_salary: breakdown.base_salary,
            total_days: breakdown.total_days,
            present_days: breakdown.present_days,
            absent_days: breakdown.absent_days,
            leave_days: breakdown.leave_days,
            holiday_days: breakdown.holiday_days,
            overtime_hours: breakdown.overtime_hours,
            undertime_hours: breakdown.undertime_hours,
            overtime_pay: breakdown.overtime_pay,
            undertime_deduction: breakdown.undertime_deduction,
            advance_amount: breakdown.advance_amount,
            earned_salary: breakdown.earned_salary,
            final_salary: breakdown.final_salary,
            details: breakdown.details,
            generated_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the derived fields in place from a fresh breakdown,
    /// keeping the record identity and generation stamp.
    pub fn apply_breakdown(&mut self, breakdown: SalaryBreakdown, now: DateTime<Utc>) {
        self.base_salary = breakdown.base_salary;
        self.total_days = breakdown.total_days;
        self.present_days = breakdown.present_days;
        self.absent_days = breakdown.absent_days;
        self.leave_days = breakdown.leave_days;
        self.holiday_days = breakdown.holiday_days;
        self.overtime_hours = breakdown.overtime_hours;
        self.undertime_hours = breakdown.undertime_hours;
        self.overtime_pay = breakdown.overtime_pay;
        self.undertime_deduction = breakdown.undertime_deduction;
        self.advance_amount = breakdown.advance_amount;
        self.earned_salary = breakdown.earned_salary;
        self.final_salary = breakdown.final_salary;
        self.details = breakdown.details;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::breakdown::{OvertimeWageSource, SalaryBreakdown};
    use crate::config::DepartmentRules;

    fn sample_breakdown(final_salary: i64) -> SalaryBreakdown {
        SalaryBreakdown {
            base_salary: Decimal::new(30000, 0),
            total_days: 30,
            present_days: 25,
            absent_days: 2,
            leave_days: 3,
            holiday_days: 0,
            overtime_hours: Decimal::ZERO,
            undertime_hours: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            undertime_deduction: Decimal::ZERO,
            advance_amount: Decimal::ZERO,
            earned_salary: Decimal::new(28000, 0),
            final_salary: Decimal::new(final_salary, 0),
            details: CalculationDetails {
                per_day_salary: Decimal::new(1000, 0),
                hourly_rate: Decimal::new(125, 0),
                overtime_wage: Decimal::new(1875, 1),
                overtime_wage_source: OvertimeWageSource::DerivedFromHourlyRate,
                rules: DepartmentRules::fallback(),
                checks: vec![],
            },
        }
    }

    #[test]
    fn test_from_breakdown_stamps_both_timestamps() {
        let now = Utc::now();
        let record = PayrollRecord::from_breakdown(1, 3, 2026, sample_breakdown(28000), now);

        assert_eq!(record.generated_at, now);
        assert_eq!(record.updated_at, now);
        assert_eq!(record.final_salary, Decimal::new(28000, 0));
    }

    #[test]
    fn test_apply_breakdown_keeps_generation_stamp() {
        let generated = Utc::now();
        let mut record = PayrollRecord::from_breakdown(1, 3, 2026, sample_breakdown(28000), generated);

        let later = generated + chrono::Duration::hours(2);
        record.apply_breakdown(sample_breakdown(27000), later);

        assert_eq!(record.generated_at, generated);
        assert_eq!(record.updated_at, later);
        assert_eq!(record.final_salary, Decimal::new(27000, 0));
    }

    #[test]
    fn test_undertime_deduction_serializes_as_legacy_name() {
        let record =
            PayrollRecord::from_breakdown(1, 3, 2026, sample_breakdown(28000), Utc::now());
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"absence_deduction\""));
        assert!(!json.contains("\"undertime_deduction\""));
    }
}
