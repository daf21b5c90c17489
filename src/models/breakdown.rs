//! Salary breakdown produced by a calculation run.
//!
//! The breakdown is ephemeral: it is projected into a
//! [`PayrollRecord`](crate::models::PayrollRecord) when persisted and
//! returned directly over the API otherwise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DepartmentRules;

/// Where the effective overtime wage of a calculation came from.
///
/// Precedence: an explicit per-employee wage wins over an explicit rate,
/// which wins over the rate derived from the department multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeWageSource {
    /// The employee's explicit `overtime_wage`.
    EmployeeWage,
    /// The employee's explicit `overtime_rate`.
    EmployeeRate,
    /// `hourly_rate * overtime_multiplier` from the department rules.
    DerivedFromHourlyRate,
}

/// The outcome of one business-rule check.
///
/// An entry with `is_valid == false` is a violation; the engine fails the
/// calculation when any violation is present, concatenating the messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCheck {
    /// Machine identifier for the rule (e.g. `"advance_within_cap"`).
    pub rule: String,
    /// Whether the rule passed.
    pub is_valid: bool,
    /// Human-readable message; empty for passing checks.
    pub message: String,
}

/// Supporting figures behind a salary breakdown.
///
/// Carried alongside the headline numbers so a payroll reviewer can see
/// which rates and rules produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// Base salary divided by the authoritative days in month.
    pub per_day_salary: Decimal,
    /// Base salary divided by (days in month * standard hours per day).
    pub hourly_rate: Decimal,
    /// The effective hourly overtime wage used, even when no overtime
    /// was paid.
    pub overtime_wage: Decimal,
    /// Where the effective overtime wage came from.
    pub overtime_wage_source: OvertimeWageSource,
    /// Snapshot of the department rules the calculation ran under.
    pub rules: DepartmentRules,
    /// Results of every business-rule check, passing and failing.
    pub checks: Vec<RuleCheck>,
}

/// A complete monthly salary breakdown for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Base monthly salary the calculation started from.
    pub base_salary: Decimal,
    /// Authoritative days in the month (may differ from the calendar).
    pub total_days: u32,
    /// Days marked present.
    pub present_days: u32,
    /// Days marked absent.
    pub absent_days: u32,
    /// Days on approved leave (paid).
    pub leave_days: u32,
    /// Declared holidays (paid).
    pub holiday_days: u32,
    /// Total overtime hours; zero for departments that do not track them.
    pub overtime_hours: Decimal,
    /// Total undertime hours; zero for departments that do not track them.
    pub undertime_hours: Decimal,
    /// Overtime pay at the effective overtime wage.
    pub overtime_pay: Decimal,
    /// Undertime hours charged at the hourly rate.
    pub undertime_deduction: Decimal,
    /// Total advances withdrawn during the month.
    pub advance_amount: Decimal,
    /// Salary earned from paid days (or full base salary when the
    /// department is exempt from deductions).
    pub earned_salary: Decimal,
    /// Final payable salary, floored at zero.
    pub final_salary: Decimal,
    /// Supporting figures and rule-check results.
    pub details: CalculationDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DepartmentRules;

    fn sample_details() -> CalculationDetails {
        CalculationDetails {
            per_day_salary: Decimal::new(1000, 0),
            hourly_rate: Decimal::new(125, 0),
            overtime_wage: Decimal::new(1875, 1),
            overtime_wage_source: OvertimeWageSource::DerivedFromHourlyRate,
            rules: DepartmentRules::fallback(),
            checks: vec![RuleCheck {
                rule: "advance_within_cap".to_string(),
                is_valid: true,
                message: String::new(),
            }],
        }
    }

    #[test]
    fn test_overtime_wage_source_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OvertimeWageSource::EmployeeWage).unwrap(),
            "\"employee_wage\""
        );
        assert_eq!(
            serde_json::to_string(&OvertimeWageSource::DerivedFromHourlyRate).unwrap(),
            "\"derived_from_hourly_rate\""
        );
    }

    #[test]
    fn test_breakdown_round_trip() {
        let breakdown = SalaryBreakdown {
            base_salary: Decimal::new(30000, 0),
            total_days: 30,
            present_days: 25,
            absent_days: 2,
            leave_days: 3,
            holiday_days: 0,
            overtime_hours: Decimal::new(50, 0),
            undertime_hours: Decimal::ZERO,
            overtime_pay: Decimal::new(9375, 0),
            undertime_deduction: Decimal::ZERO,
            advance_amount: Decimal::new(1000, 0),
            earned_salary: Decimal::new(28000, 0),
            final_salary: Decimal::new(36375, 0),
            details: sample_details(),
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: SalaryBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }

    #[test]
    fn test_details_preserve_check_outcomes() {
        let details = sample_details();
        assert!(details.checks.iter().all(|c| c.is_valid));
    }
}
