//! Strongly-typed department rule sets.
//!
//! Every department resolves to exactly one `DepartmentRules` value. The
//! built-in policy table covers all known departments; a YAML file can
//! override individual departments (see [`super::RulesLoader`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Department;

fn default_max_overtime_hours() -> Decimal {
    Decimal::new(4, 0)
}

fn default_max_advance_percentage() -> Decimal {
    Decimal::new(50, 0)
}

fn default_working_days() -> u32 {
    30
}

fn default_standard_hours() -> Decimal {
    Decimal::new(8, 0)
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

fn default_min_hours_full_day() -> Option<Decimal> {
    Some(Decimal::new(8, 0))
}

fn default_half_day_hours() -> Option<Decimal> {
    Some(Decimal::new(4, 0))
}

/// The calculation policy for one department.
///
/// Field-level serde defaults match the hard-coded fallback, so a YAML
/// override entry only needs to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRules {
    /// Salary is paid in full regardless of absence.
    #[serde(default)]
    pub is_exempt_from_deductions: bool,
    /// Overtime is never paid for this department.
    #[serde(default)]
    pub is_exempt_from_overtime: bool,
    /// Cap on overtime hours credited per day.
    #[serde(default = "default_max_overtime_hours")]
    pub max_overtime_hours_per_day: Decimal,
    /// Cap on advances as a percentage of base salary.
    #[serde(default = "default_max_advance_percentage")]
    pub max_advance_percentage: Decimal,
    /// Fallback working-day count when no calendar entry exists.
    #[serde(default = "default_working_days")]
    pub working_days_per_month: u32,
    /// Standard shift length in hours.
    #[serde(default = "default_standard_hours")]
    pub standard_hours_per_day: Decimal,
    /// Multiplier applied to the hourly rate when no explicit overtime
    /// wage or rate is set.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Minimum hours for a day to count as full.
    #[serde(default = "default_min_hours_full_day")]
    pub min_hours_full_day: Option<Decimal>,
    /// Hours counted for a half day.
    #[serde(default = "default_half_day_hours")]
    pub half_day_hours: Option<Decimal>,
    /// Standard hours of the day shift, when it differs from the default.
    #[serde(default)]
    pub day_shift_hours: Option<Decimal>,
    /// Standard hours of the night shift, when it differs from the default.
    #[serde(default)]
    pub night_shift_hours: Option<Decimal>,
    /// Wage multiplier for night-shift hours.
    #[serde(default)]
    pub night_shift_multiplier: Option<Decimal>,
}

impl DepartmentRules {
    /// The hard-coded fallback rule set.
    ///
    /// Used when a department resolves to no configured row; a
    /// missing-config department must not block payroll.
    pub fn fallback() -> Self {
        Self {
            is_exempt_from_deductions: false,
            is_exempt_from_overtime: false,
            max_overtime_hours_per_day: default_max_overtime_hours(),
            max_advance_percentage: default_max_advance_percentage(),
            working_days_per_month: default_working_days(),
            standard_hours_per_day: default_standard_hours(),
            overtime_multiplier: default_overtime_multiplier(),
            min_hours_full_day: default_min_hours_full_day(),
            half_day_hours: default_half_day_hours(),
            day_shift_hours: None,
            night_shift_hours: None,
            night_shift_multiplier: None,
        }
    }

    /// The built-in policy for a known department.
    pub fn default_for(department: Department) -> Self {
        match department {
            Department::Workshop | Department::Enamel => Self {
                day_shift_hours: Some(Decimal::new(8, 0)),
                night_shift_hours: Some(Decimal::new(12, 0)),
                night_shift_multiplier: Some(Decimal::new(125, 2)),
                ..Self::fallback()
            },
            Department::Polishing => Self {
                is_exempt_from_overtime: true,
                ..Self::fallback()
            },
            Department::Office | Department::Sales => Self {
                is_exempt_from_deductions: true,
                is_exempt_from_overtime: true,
                ..Self::fallback()
            },
            Department::Security => Self {
                is_exempt_from_overtime: true,
                ..Self::fallback()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_matches_documented_defaults() {
        let rules = DepartmentRules::fallback();

        assert!(!rules.is_exempt_from_deductions);
        assert_eq!(rules.max_overtime_hours_per_day, Decimal::new(4, 0));
        assert_eq!(rules.max_advance_percentage, Decimal::new(50, 0));
        assert_eq!(rules.working_days_per_month, 30);
        assert_eq!(rules.standard_hours_per_day, Decimal::new(8, 0));
        assert_eq!(rules.overtime_multiplier, Decimal::new(15, 1));
        assert_eq!(rules.min_hours_full_day, Some(Decimal::new(8, 0)));
        assert_eq!(rules.half_day_hours, Some(Decimal::new(4, 0)));
    }

    #[test]
    fn test_office_and_sales_are_exempt() {
        for department in [Department::Office, Department::Sales] {
            let rules = DepartmentRules::default_for(department);
            assert!(rules.is_exempt_from_deductions, "{}", department);
            assert!(rules.is_exempt_from_overtime, "{}", department);
        }
    }

    #[test]
    fn test_workshop_and_enamel_pay_overtime() {
        for department in [Department::Workshop, Department::Enamel] {
            let rules = DepartmentRules::default_for(department);
            assert!(!rules.is_exempt_from_overtime, "{}", department);
            assert_eq!(rules.night_shift_hours, Some(Decimal::new(12, 0)));
        }
    }

    #[test]
    fn test_partial_yaml_entry_fills_defaults() {
        let yaml = "is_exempt_from_deductions: true\n";
        let rules: DepartmentRules = serde_yaml::from_str(yaml).unwrap();

        assert!(rules.is_exempt_from_deductions);
        assert_eq!(rules.max_advance_percentage, Decimal::new(50, 0));
        assert_eq!(rules.standard_hours_per_day, Decimal::new(8, 0));
    }
}
