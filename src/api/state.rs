//! Application state for the payroll calculation API.

use std::sync::Arc;

use crate::calculation::{BusinessCalendar, CalculationSession};
use crate::config::RulesLoader;

/// Shared application state.
///
/// Holds the process-lifetime reference-data sources. Every request
/// builds a fresh [`CalculationSession`] on top of them so reference
/// data is never cached across runs.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RulesLoader>,
    calendar: Option<Arc<dyn BusinessCalendar>>,
}

impl AppState {
    /// Creates application state over the given rules loader.
    pub fn new(rules: RulesLoader) -> Self {
        Self {
            rules: Arc::new(rules),
            calendar: None,
        }
    }

    /// Attaches a business-calendar source.
    pub fn with_calendar(mut self, calendar: Arc<dyn BusinessCalendar>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Builds a fresh per-request calculation session.
    pub fn session(&self) -> CalculationSession {
        let session = CalculationSession::new(self.rules.clone());
        match &self.calendar {
            Some(calendar) => session.with_calendar(calendar.clone()),
            None => session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_sessions_are_independent() {
        let state = AppState::new(RulesLoader::builtin());
        let mut a = state.session();
        let mut b = state.session();
        assert_eq!(a.days_in_month(2, 2026), b.days_in_month(2, 2026));
    }
}
