//! Day-count tallies over a month's attendance rows.

use crate::models::{AttendanceRecord, AttendanceStatus};

/// Present/absent/leave/holiday day counts for one employee-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayTally {
    /// Days marked present.
    pub present: u32,
    /// Days marked absent.
    pub absent: u32,
    /// Days on approved leave.
    pub leave: u32,
    /// Declared holidays.
    pub holiday: u32,
}

impl DayTally {
    /// Days paid as worked: present, leave, and holiday days.
    ///
    /// Absence reduces pay only by exclusion from this count; it is never
    /// charged as a separate monetary deduction.
    pub fn paid_days(&self) -> u32 {
        self.present + self.leave + self.holiday
    }
}

/// Tallies attendance rows by status.
pub fn tally_days(rows: &[AttendanceRecord]) -> DayTally {
    let mut tally = DayTally::default();
    for row in rows {
        match row.status {
            AttendanceStatus::Present => tally.present += 1,
            AttendanceStatus::Absent => tally.absent += 1,
            AttendanceStatus::Leave => tally.leave += 1,
            AttendanceStatus::Holiday => tally.holiday += 1,
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::marked(
            1,
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            status,
        )
    }

    #[test]
    fn test_tally_counts_each_status() {
        let rows = vec![
            row(1, AttendanceStatus::Present),
            row(2, AttendanceStatus::Present),
            row(3, AttendanceStatus::Absent),
            row(4, AttendanceStatus::Leave),
            row(5, AttendanceStatus::Holiday),
            row(6, AttendanceStatus::Holiday),
        ];

        let tally = tally_days(&rows);
        assert_eq!(tally.present, 2);
        assert_eq!(tally.absent, 1);
        assert_eq!(tally.leave, 1);
        assert_eq!(tally.holiday, 2);
    }

    #[test]
    fn test_paid_days_excludes_absences() {
        let tally = DayTally {
            present: 20,
            absent: 5,
            leave: 2,
            holiday: 3,
        };
        assert_eq!(tally.paid_days(), 25);
    }

    #[test]
    fn test_empty_rows_tally_to_zero() {
        assert_eq!(tally_days(&[]), DayTally::default());
    }
}
