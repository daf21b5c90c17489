//! Request types for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, AttendanceStatus, Department, Employee, ShiftType,
};

/// Request body for the `/calculate` endpoint.
///
/// Carries all inputs of one salary calculation: the employee, the
/// target month, the month's attendance rows, and the advance total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// Target month (1-12).
    pub month: u32,
    /// Target year.
    pub year: i32,
    /// The month's attendance rows.
    #[serde(default)]
    pub attendance: Vec<AttendanceRowRequest>,
    /// Total advances withdrawn during the month.
    #[serde(default)]
    pub advance_total: Decimal,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's display name.
    #[serde(default)]
    pub name: String,
    /// The department the employee belongs to.
    pub department: Department,
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Explicit hourly overtime rate, or zero when unset.
    #[serde(default)]
    pub overtime_rate: Decimal,
    /// Explicit per-employee hourly overtime wage, or zero when unset.
    #[serde(default)]
    pub overtime_wage: Decimal,
}

/// One attendance row in a calculation request.
///
/// The employee id is taken from the request's employee, not repeated
/// per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRowRequest {
    /// Calendar day the row tracks.
    pub attendance_date: NaiveDate,
    /// The attendance outcome for the day.
    pub status: AttendanceStatus,
    /// Check-in time (`HH:MM` or `HH:MM:SS`), if clocked.
    #[serde(default)]
    pub check_in_time: Option<String>,
    /// Check-out time (`HH:MM` or `HH:MM:SS`), if clocked.
    #[serde(default)]
    pub check_out_time: Option<String>,
    /// Hours worked for the day.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Overtime hours recorded for the day.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Undertime hours recorded for the day.
    #[serde(default)]
    pub undertime_hours: Decimal,
    /// The shift this row was clocked against.
    #[serde(default)]
    pub shift_type: ShiftType,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            department: req.department,
            base_salary: req.base_salary,
            overtime_rate: req.overtime_rate,
            overtime_wage: req.overtime_wage,
            is_active: true,
        }
    }
}

impl AttendanceRowRequest {
    /// Converts the row into a domain record owned by the given employee.
    pub fn into_record(self, employee_id: u64) -> AttendanceRecord {
        AttendanceRecord {
            employee_id,
            attendance_date: self.attendance_date,
            status: self.status,
            check_in_time: self.check_in_time,
            check_out_time: self.check_out_time,
            hours_worked: self.hours_worked,
            overtime_hours: self.overtime_hours,
            undertime_hours: self.undertime_hours,
            late_hours: Decimal::ZERO,
            shift_type: self.shift_type,
            biometric_verified: false,
            credential_id: None,
        }
    }
}
