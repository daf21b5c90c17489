//! Per-run calculation session with reference-data caches.
//!
//! Department rules and days-in-month lookups are memoized for the
//! lifetime of one session (a single calculation or batch run). A new
//! session is built for every run so rule or calendar changes between
//! runs are always picked up; there is no hidden process-level state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{DepartmentRules, RulesLoader};
use crate::models::Department;

use super::time::calendar_days_in_month;

/// Source of the business-authoritative day count per month.
///
/// The authoritative value may differ from the plain calendar count by
/// policy (e.g. a 26-working-day convention). Returning `None` for a
/// month means no entry exists and the calendar count applies.
pub trait BusinessCalendar: Send + Sync {
    /// Returns the authoritative day count for (month, year), if any.
    fn days_in_month(&self, month: u32, year: i32) -> Option<u32>;
}

/// One run's calculation context: rules source, calendar source, and the
/// memoized lookups on top of them.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use payroll_engine::calculation::CalculationSession;
/// use payroll_engine::config::RulesLoader;
/// use payroll_engine::models::Department;
///
/// let mut session = CalculationSession::new(Arc::new(RulesLoader::builtin()));
/// let rules = session.rules(Department::Workshop);
/// assert!(!rules.is_exempt_from_deductions);
/// assert_eq!(session.days_in_month(2, 2026), 28);
/// ```
pub struct CalculationSession {
    rules_loader: Arc<RulesLoader>,
    calendar: Option<Arc<dyn BusinessCalendar>>,
    rules_cache: HashMap<Department, DepartmentRules>,
    days_cache: HashMap<(i32, u32), u32>,
}

impl CalculationSession {
    /// Creates a session over the given rules source with no business
    /// calendar (the plain calendar count applies everywhere).
    pub fn new(rules_loader: Arc<RulesLoader>) -> Self {
        Self {
            rules_loader,
            calendar: None,
            rules_cache: HashMap::new(),
            days_cache: HashMap::new(),
        }
    }

    /// Attaches a business-calendar source.
    pub fn with_calendar(mut self, calendar: Arc<dyn BusinessCalendar>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Resolves the rules for a department, memoized for this session.
    pub fn rules(&mut self, department: Department) -> DepartmentRules {
        self.rules_cache
            .entry(department)
            .or_insert_with(|| self.rules_loader.rules_for(department))
            .clone()
    }

    /// Resolves the authoritative days-in-month value, memoized per
    /// (year, month) for this session.
    ///
    /// Falls back to the calendar's actual day count when no business
    /// calendar is attached or it has no entry, so a calculation never
    /// stalls on a missing dependency.
    pub fn days_in_month(&mut self, month: u32, year: i32) -> u32 {
        if let Some(days) = self.days_cache.get(&(year, month)) {
            return *days;
        }

        let days = self
            .calendar
            .as_ref()
            .and_then(|c| c.days_in_month(month, year))
            .unwrap_or_else(|| calendar_days_in_month(month, year));

        self.days_cache.insert((year, month), days);
        days
    }

    /// Drops both caches. The next lookups re-read the sources.
    pub fn clear(&mut self) {
        self.rules_cache.clear();
        self.days_cache.clear();
    }
}
