//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation,
//! recalculation, and batch payroll generation.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { employee_id: 1001 };
/// assert_eq!(error.to_string(), "Employee not found: 1001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rules configuration file was not found at the specified path.
    #[error("Rules configuration not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rules configuration file could not be parsed.
    #[error("Failed to parse rules configuration '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The employee referenced by a calculation could not be resolved.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: u64,
    },

    /// A computed result violated one or more business rules.
    ///
    /// The message concatenates every violated rule so the caller can
    /// surface a single user-facing failure.
    #[error("Salary validation failed: {message}")]
    ValidationFailed {
        /// The concatenated violation messages.
        message: String,
    },

    /// A batch payroll run had no active employees to process.
    #[error("No eligible employees for payroll generation in {month}/{year}")]
    NoEligibleEmployees {
        /// The target month (1-12).
        month: u32,
        /// The target year.
        year: i32,
    },

    /// The backing data store failed to read or write a record.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
