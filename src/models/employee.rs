//! Employee model and the department enumeration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed set of departments employees belong to.
///
/// Every department resolves to exactly one set of calculation rules
/// (see [`crate::config::DepartmentRules`]). Overtime and undertime hours
/// are only tracked for production-floor departments; see
/// [`Department::tracks_overtime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Production workshop floor.
    Workshop,
    /// Enamel application and firing.
    Enamel,
    /// Polishing and finishing.
    Polishing,
    /// Administrative office staff.
    Office,
    /// Showroom and sales staff.
    Sales,
    /// Premises security.
    Security,
}

impl Department {
    /// Returns the canonical lowercase name used in configuration files
    /// and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Workshop => "workshop",
            Department::Enamel => "enamel",
            Department::Polishing => "polishing",
            Department::Office => "office",
            Department::Sales => "sales",
            Department::Security => "security",
        }
    }

    /// Returns true if overtime and undertime hours are tracked for this
    /// department.
    ///
    /// Only the workshop and enamel floors clock measurable overtime; for
    /// every other department the monthly totals always read zero no matter
    /// what hours the attendance rows carry.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Department;
    ///
    /// assert!(Department::Workshop.tracks_overtime());
    /// assert!(Department::Enamel.tracks_overtime());
    /// assert!(!Department::Office.tracks_overtime());
    /// ```
    pub fn tracks_overtime(&self) -> bool {
        matches!(self, Department::Workshop | Department::Enamel)
    }

    /// All departments, in declaration order.
    pub fn all() -> [Department; 6] {
        [
            Department::Workshop,
            Department::Enamel,
            Department::Polishing,
            Department::Office,
            Department::Sales,
            Department::Security,
        ]
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents an employee whose salary is computed by the engine.
///
/// The engine only reads employee data; the HR module owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    pub department: Department,
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Explicit hourly overtime rate, or zero when unset.
    #[serde(default)]
    pub overtime_rate: Decimal,
    /// Explicit per-employee hourly overtime wage, or zero when unset.
    ///
    /// Takes precedence over `overtime_rate` and over the rate derived
    /// from the department's overtime multiplier.
    #[serde(default)]
    pub overtime_wage: Decimal,
    /// Whether the employee is active (eligible for payroll generation).
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_overtime_only_for_workshop_and_enamel() {
        for department in Department::all() {
            let expected = matches!(department, Department::Workshop | Department::Enamel);
            assert_eq!(department.tracks_overtime(), expected, "{}", department);
        }
    }

    #[test]
    fn test_department_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Department::Workshop).unwrap(),
            "\"workshop\""
        );
        assert_eq!(
            serde_json::to_string(&Department::Enamel).unwrap(),
            "\"enamel\""
        );
    }

    #[test]
    fn test_department_display_matches_as_str() {
        for department in Department::all() {
            assert_eq!(department.to_string(), department.as_str());
        }
    }

    #[test]
    fn test_deserialize_employee_defaults() {
        let json = r#"{
            "id": 1001,
            "name": "Asha Rahman",
            "department": "workshop",
            "base_salary": "30000"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 1001);
        assert_eq!(employee.department, Department::Workshop);
        assert_eq!(employee.overtime_rate, Decimal::ZERO);
        assert_eq!(employee.overtime_wage, Decimal::ZERO);
        assert!(employee.is_active);
    }

    #[test]
    fn test_employee_round_trip() {
        let employee = Employee {
            id: 7,
            name: "Nadia Karim".to_string(),
            department: Department::Sales,
            base_salary: Decimal::new(25000, 0),
            overtime_rate: Decimal::new(300, 0),
            overtime_wage: Decimal::ZERO,
            is_active: false,
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
