//! Overtime and undertime hour derivation and summation.
//!
//! Hour tracking is gated by department policy: only departments where
//! [`Department::tracks_overtime`] holds ever carry non-zero overtime or
//! undertime totals, no matter what the attendance rows record.

use rust_decimal::Decimal;

use crate::config::DepartmentRules;
use crate::models::{
    AttendanceRecord, Department, Employee, OvertimeWageSource, ShiftType,
};

use super::time::hours_worked;

/// Monthly overtime/undertime totals for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoursSummary {
    /// Total overtime hours.
    pub overtime: Decimal,
    /// Total undertime hours.
    pub undertime: Decimal,
}

/// Sums the recorded overtime and undertime hours for a month.
///
/// For any department that does not track overtime the summary is zero
/// regardless of the recorded hours.
pub fn sum_month_hours(department: Department, rows: &[AttendanceRecord]) -> HoursSummary {
    if !department.tracks_overtime() {
        return HoursSummary::default();
    }

    HoursSummary {
        overtime: rows.iter().map(|r| r.overtime_hours).sum(),
        undertime: rows.iter().map(|r| r.undertime_hours).sum(),
    }
}

/// Resolves the effective hourly overtime wage for an employee.
///
/// Precedence: the employee's explicit `overtime_wage` when positive,
/// else the explicit `overtime_rate` when positive, else the hourly rate
/// scaled by the department's overtime multiplier.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::effective_overtime_wage;
/// use payroll_engine::config::DepartmentRules;
/// use payroll_engine::models::{Department, Employee, OvertimeWageSource};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee {
///     id: 1,
///     name: "Asha Rahman".to_string(),
///     department: Department::Workshop,
///     base_salary: Decimal::new(30000, 0),
///     overtime_rate: Decimal::new(300, 0),
///     overtime_wage: Decimal::new(500, 0),
///     is_active: true,
/// };
/// let rules = DepartmentRules::fallback();
/// let hourly_rate = Decimal::new(125, 0);
///
/// let (wage, source) = effective_overtime_wage(&employee, hourly_rate, &rules);
/// assert_eq!(wage, Decimal::new(500, 0));
/// assert_eq!(source, OvertimeWageSource::EmployeeWage);
///
/// employee.overtime_wage = Decimal::ZERO;
/// let (wage, _) = effective_overtime_wage(&employee, hourly_rate, &rules);
/// assert_eq!(wage, Decimal::new(300, 0));
/// ```
pub fn effective_overtime_wage(
    employee: &Employee,
    hourly_rate: Decimal,
    rules: &DepartmentRules,
) -> (Decimal, OvertimeWageSource) {
    if employee.overtime_wage > Decimal::ZERO {
        (employee.overtime_wage, OvertimeWageSource::EmployeeWage)
    } else if employee.overtime_rate > Decimal::ZERO {
        (employee.overtime_rate, OvertimeWageSource::EmployeeRate)
    } else {
        (
            hourly_rate * rules.overtime_multiplier,
            OvertimeWageSource::DerivedFromHourlyRate,
        )
    }
}

/// Hour fields derived from a pair of clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedHours {
    /// Hours worked for the day.
    pub hours_worked: Decimal,
    /// Overtime beyond the shift's standard hours, capped per day.
    pub overtime_hours: Decimal,
    /// Hours short of the shift's standard hours.
    pub undertime_hours: Decimal,
}

/// Standard hours for a shift type under the given rules.
fn shift_standard_hours(shift_type: ShiftType, rules: &DepartmentRules) -> Decimal {
    match shift_type {
        ShiftType::Day => rules
            .day_shift_hours
            .unwrap_or(rules.standard_hours_per_day),
        ShiftType::Night => rules
            .night_shift_hours
            .unwrap_or(rules.standard_hours_per_day),
        ShiftType::Regular => rules.standard_hours_per_day,
    }
}

/// Derives a day's hour fields from its clock times.
///
/// The worked duration is always derived. Overtime and undertime are
/// derived only for departments that track them: overtime is the excess
/// over the shift's standard hours capped at
/// `max_overtime_hours_per_day`, undertime the shortfall below them.
pub fn derive_day_hours(
    check_in: &str,
    check_out: &str,
    shift_type: ShiftType,
    department: Department,
    rules: &DepartmentRules,
) -> DerivedHours {
    let worked = hours_worked(check_in, check_out);

    if !department.tracks_overtime() {
        return DerivedHours {
            hours_worked: worked,
            ..DerivedHours::default()
        };
    }

    let standard = shift_standard_hours(shift_type, rules);
    let overtime = (worked - standard)
        .max(Decimal::ZERO)
        .min(rules.max_overtime_hours_per_day);
    let undertime = (standard - worked).max(Decimal::ZERO);

    DerivedHours {
        hours_worked: worked,
        overtime_hours: overtime.round_dp(2),
        undertime_hours: undertime.round_dp(2),
    }
}

/// Recomputes a record's derived hour fields in place.
///
/// A no-op unless both clock times are present. The legacy `late_hours`
/// field is zeroed on every recompute.
pub fn apply_derived_hours(
    record: &mut AttendanceRecord,
    department: Department,
    rules: &DepartmentRules,
) {
    let (Some(check_in), Some(check_out)) = (&record.check_in_time, &record.check_out_time)
    else {
        return;
    };

    let derived = derive_day_hours(check_in, check_out, record.shift_type, department, rules);
    record.hours_worked = derived.hours_worked;
    record.overtime_hours = derived.overtime_hours;
    record.undertime_hours = derived.undertime_hours;
    record.late_hours = Decimal::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn workshop_rules() -> DepartmentRules {
        DepartmentRules::default_for(Department::Workshop)
    }

    fn row_with_hours(overtime: &str, undertime: &str) -> AttendanceRecord {
        let mut record = AttendanceRecord::marked(
            1,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            AttendanceStatus::Present,
        );
        record.overtime_hours = dec(overtime);
        record.undertime_hours = dec(undertime);
        record
    }

    #[test]
    fn test_sum_hours_for_tracking_department() {
        let rows = vec![row_with_hours("2", "0"), row_with_hours("1.5", "0.5")];
        let summary = sum_month_hours(Department::Workshop, &rows);

        assert_eq!(summary.overtime, dec("3.5"));
        assert_eq!(summary.undertime, dec("0.5"));
    }

    #[test]
    fn test_sum_hours_zero_for_non_tracking_department() {
        let rows = vec![row_with_hours("4", "2")];

        for department in [
            Department::Polishing,
            Department::Office,
            Department::Sales,
            Department::Security,
        ] {
            let summary = sum_month_hours(department, &rows);
            assert_eq!(summary.overtime, Decimal::ZERO, "{}", department);
            assert_eq!(summary.undertime, Decimal::ZERO, "{}", department);
        }
    }

    #[test]
    fn test_wage_precedence_explicit_wage_wins() {
        let employee = Employee {
            id: 1,
            name: "x".to_string(),
            department: Department::Workshop,
            base_salary: dec("30000"),
            overtime_rate: dec("300"),
            overtime_wage: dec("500"),
            is_active: true,
        };

        let (wage, source) = effective_overtime_wage(&employee, dec("125"), &workshop_rules());
        assert_eq!(wage, dec("500"));
        assert_eq!(source, OvertimeWageSource::EmployeeWage);
    }

    #[test]
    fn test_wage_precedence_rate_when_no_wage() {
        let employee = Employee {
            id: 1,
            name: "x".to_string(),
            department: Department::Workshop,
            base_salary: dec("30000"),
            overtime_rate: dec("300"),
            overtime_wage: Decimal::ZERO,
            is_active: true,
        };

        let (wage, source) = effective_overtime_wage(&employee, dec("125"), &workshop_rules());
        assert_eq!(wage, dec("300"));
        assert_eq!(source, OvertimeWageSource::EmployeeRate);
    }

    #[test]
    fn test_wage_precedence_derived_when_both_unset() {
        let employee = Employee {
            id: 1,
            name: "x".to_string(),
            department: Department::Workshop,
            base_salary: dec("30000"),
            overtime_rate: Decimal::ZERO,
            overtime_wage: Decimal::ZERO,
            is_active: true,
        };

        let (wage, source) = effective_overtime_wage(&employee, dec("125"), &workshop_rules());
        assert_eq!(wage, dec("187.5"));
        assert_eq!(source, OvertimeWageSource::DerivedFromHourlyRate);
    }

    #[test]
    fn test_derive_day_hours_regular_shift_overtime() {
        let derived = derive_day_hours(
            "09:00",
            "19:00",
            ShiftType::Regular,
            Department::Workshop,
            &workshop_rules(),
        );

        assert_eq!(derived.hours_worked, dec("10"));
        assert_eq!(derived.overtime_hours, dec("2"));
        assert_eq!(derived.undertime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_derive_day_hours_caps_overtime() {
        // 09:00 to 23:00 is 14 hours; 6 over standard, capped at 4.
        let derived = derive_day_hours(
            "09:00",
            "23:00",
            ShiftType::Regular,
            Department::Workshop,
            &workshop_rules(),
        );

        assert_eq!(derived.overtime_hours, dec("4"));
    }

    #[test]
    fn test_derive_day_hours_night_shift_standard() {
        // Night shift 19:00 to 08:00 is 13 hours against a 12-hour
        // night standard: 1 hour of overtime.
        let derived = derive_day_hours(
            "19:00",
            "08:00",
            ShiftType::Night,
            Department::Enamel,
            &DepartmentRules::default_for(Department::Enamel),
        );

        assert_eq!(derived.hours_worked, dec("13"));
        assert_eq!(derived.overtime_hours, dec("1"));
        assert_eq!(derived.undertime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_derive_day_hours_undertime() {
        let derived = derive_day_hours(
            "09:00",
            "15:00",
            ShiftType::Regular,
            Department::Workshop,
            &workshop_rules(),
        );

        assert_eq!(derived.hours_worked, dec("6"));
        assert_eq!(derived.overtime_hours, Decimal::ZERO);
        assert_eq!(derived.undertime_hours, dec("2"));
    }

    #[test]
    fn test_derive_day_hours_non_tracking_department_only_worked() {
        let derived = derive_day_hours(
            "09:00",
            "19:00",
            ShiftType::Regular,
            Department::Office,
            &DepartmentRules::default_for(Department::Office),
        );

        assert_eq!(derived.hours_worked, dec("10"));
        assert_eq!(derived.overtime_hours, Decimal::ZERO);
        assert_eq!(derived.undertime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_apply_derived_hours_requires_both_times() {
        let mut record = row_with_hours("3", "0");
        record.check_in_time = Some("09:00".to_string());
        record.check_out_time = None;

        apply_derived_hours(&mut record, Department::Workshop, &workshop_rules());

        // Untouched: checkout is missing.
        assert_eq!(record.overtime_hours, dec("3"));
    }

    #[test]
    fn test_apply_derived_hours_zeroes_late_hours() {
        let mut record = row_with_hours("0", "0");
        record.check_in_time = Some("09:00".to_string());
        record.check_out_time = Some("17:00".to_string());
        record.late_hours = dec("1");

        apply_derived_hours(&mut record, Department::Workshop, &workshop_rules());

        assert_eq!(record.hours_worked, dec("8"));
        assert_eq!(record.late_hours, Decimal::ZERO);
    }
}
