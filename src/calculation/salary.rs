//! Monthly salary calculation.
//!
//! Given one employee's attendance rows, advance total, department rules,
//! and the authoritative days-in-month value, produces the full salary
//! breakdown. The calculation is all-or-nothing: a business-rule
//! violation fails the whole computation with the violated rules
//! concatenated into one message.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, CalculationDetails, Employee, SalaryBreakdown,
};

use super::hours::{effective_overtime_wage, sum_month_hours};
use super::session::CalculationSession;
use super::tally::tally_days;
use super::validation::{run_checks, violation_message};

/// Calculates one employee's salary breakdown for a month.
///
/// The algorithm:
///
/// 1. Resolve the department rules and the authoritative days in month
///    (both memoized on the session).
/// 2. Tally present/absent/leave/holiday days from the attendance rows.
/// 3. Sum overtime/undertime hours; only overtime-tracking departments
///    ever carry non-zero totals.
/// 4. Derive the per-day salary and hourly rate from the days in month.
/// 5. Earned salary: the full base salary for deduction-exempt
///    departments; otherwise paid days (present + leave + holiday) times
///    the per-day salary. Absence reduces pay only by exclusion from the
///    paid-day count.
/// 6. Overtime pay at the effective overtime wage (explicit employee
///    wage, else explicit rate, else hourly rate times the department
///    multiplier), unless the department is exempt from overtime.
/// 7. Undertime deduction at the hourly rate, applied even for exempt
///    departments.
/// 8. Final salary floored at zero and rounded to two decimal places.
/// 9. Business-rule checks; any violation fails the calculation.
///
/// # Errors
///
/// Returns `ValidationFailed` when a business rule is violated, and
/// `CalculationError` when the resolved reference data is unusable
/// (zero days in month or zero standard hours).
pub fn calculate_salary(
    employee: &Employee,
    month: u32,
    year: i32,
    attendance: &[AttendanceRecord],
    advance_total: Decimal,
    session: &mut CalculationSession,
) -> EngineResult<SalaryBreakdown> {
    let rules = session.rules(employee.department);
    let total_days = session.days_in_month(month, year);

    if total_days == 0 {
        return Err(EngineError::CalculationError {
            message: format!("Days in month resolved to zero for {}/{}", month, year),
        });
    }
    if rules.standard_hours_per_day <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!(
                "Standard hours per day is {} for department {}",
                rules.standard_hours_per_day, employee.department
            ),
        });
    }

    let tally = tally_days(attendance);
    let hours = sum_month_hours(employee.department, attendance);

    let days = Decimal::from(total_days);
    let per_day_salary = employee.base_salary / days;
    let hourly_rate = employee.base_salary / (days * rules.standard_hours_per_day);

    let earned_salary = if rules.is_exempt_from_deductions {
        employee.base_salary
    } else {
        Decimal::from(tally.paid_days()) * per_day_salary
    };

    let (overtime_wage, overtime_wage_source) =
        effective_overtime_wage(employee, hourly_rate, &rules);

    let overtime_pay = if !rules.is_exempt_from_overtime && hours.overtime > Decimal::ZERO {
        hours.overtime * overtime_wage
    } else {
        Decimal::ZERO
    };

    let undertime_deduction = if hours.undertime > Decimal::ZERO {
        hours.undertime * hourly_rate
    } else {
        Decimal::ZERO
    };

    let final_salary = (earned_salary + overtime_pay - undertime_deduction - advance_total)
        .max(Decimal::ZERO)
        .round_dp(2);

    let checks = run_checks(
        employee.base_salary,
        hours.overtime,
        overtime_wage,
        advance_total,
        final_salary,
        rules.max_advance_percentage,
    );
    if let Some(message) = violation_message(&checks) {
        return Err(EngineError::ValidationFailed { message });
    }

    Ok(SalaryBreakdown {
        base_salary: employee.base_salary,
        total_days,
        present_days: tally.present,
        absent_days: tally.absent,
        leave_days: tally.leave,
        holiday_days: tally.holiday,
        overtime_hours: hours.overtime,
        undertime_hours: hours.undertime,
        overtime_pay: overtime_pay.round_dp(2),
        undertime_deduction: undertime_deduction.round_dp(2),
        advance_amount: advance_total.round_dp(2),
        earned_salary: earned_salary.round_dp(2),
        final_salary,
        details: CalculationDetails {
            per_day_salary: per_day_salary.round_dp(2),
            hourly_rate: hourly_rate.round_dp(2),
            overtime_wage: overtime_wage.round_dp(2),
            overtime_wage_source,
            rules,
            checks,
        },
    })
}
