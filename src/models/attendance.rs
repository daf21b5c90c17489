//! Attendance record model and related enumerations.
//!
//! One attendance record exists per (employee, date) pair. Records are
//! created by manual marking, bulk marking, or a device sync; the engine
//! recomputes the derived hour fields whenever both check times are present
//! (see [`crate::calculation::derive_day_hours`]).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The attendance outcome recorded for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Employee was present.
    Present,
    /// Employee was absent for the day.
    Absent,
    /// Approved leave; paid as if present.
    Leave,
    /// Declared holiday; paid as if present.
    Holiday,
}

/// The shift an attendance record was clocked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Daytime shift.
    Day,
    /// Night shift; may cross midnight.
    Night,
    /// Regular shift with the department's standard hours.
    #[default]
    Regular,
}

/// A single day's attendance for one employee.
///
/// Check times arrive as `HH:MM` or `HH:MM:SS` strings from the device
/// feeds and manual entry forms; they are parsed lazily by the time
/// utilities rather than at the record boundary so that a malformed time
/// degrades to zero worked hours instead of rejecting the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the employee that owns the record.
    pub employee_id: u64,
    /// Calendar day the record tracks. Unique per employee.
    pub attendance_date: NaiveDate,
    /// The attendance outcome for the day.
    pub status: AttendanceStatus,
    /// Check-in time (`HH:MM` or `HH:MM:SS`), if clocked.
    #[serde(default)]
    pub check_in_time: Option<String>,
    /// Check-out time (`HH:MM` or `HH:MM:SS`), if clocked.
    #[serde(default)]
    pub check_out_time: Option<String>,
    /// Hours worked for the day, derived from the check times.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Overtime hours for the day, derived; zero for departments that do
    /// not track overtime.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Undertime hours for the day, derived.
    #[serde(default)]
    pub undertime_hours: Decimal,
    /// Legacy field; always zero going forward.
    #[serde(default)]
    pub late_hours: Decimal,
    /// The shift this record was clocked against.
    #[serde(default)]
    pub shift_type: ShiftType,
    /// Whether the record was confirmed by a biometric credential.
    #[serde(default)]
    pub biometric_verified: bool,
    /// Reference to the biometric credential used, if any.
    #[serde(default)]
    pub credential_id: Option<String>,
}

impl AttendanceRecord {
    /// Creates a minimal record with the given status and no clock times.
    pub fn marked(employee_id: u64, attendance_date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            employee_id,
            attendance_date,
            status,
            check_in_time: None,
            check_out_time: None,
            hours_worked: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            undertime_hours: Decimal::ZERO,
            late_hours: Decimal::ZERO,
            shift_type: ShiftType::Regular,
            biometric_verified: false,
            credential_id: None,
        }
    }
}
