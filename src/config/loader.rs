//! Department rules loading functionality.
//!
//! This module provides the [`RulesLoader`] type for resolving per-department
//! calculation rules, optionally overridden from a YAML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Department;

use super::types::DepartmentRules;

/// Override file structure: a map of department name to rules.
#[derive(Debug, serde::Deserialize)]
struct RulesFile {
    departments: HashMap<Department, DepartmentRules>,
}

/// Resolves department rules from built-in defaults plus optional YAML
/// overrides.
///
/// The loader itself is cheap reference data shared for the process
/// lifetime (an `Arc<RulesLoader>` in practice); per-run memoization lives
/// in [`crate::calculation::CalculationSession`], which is rebuilt for every
/// run so rule changes between runs are picked up.
///
/// # File format
///
/// ```text
/// departments:
///   workshop:
///     max_overtime_hours_per_day: 5
///   office:
///     is_exempt_from_deductions: true
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::RulesLoader;
/// use payroll_engine::models::Department;
///
/// let loader = RulesLoader::load("./config/departments.yaml").unwrap();
/// let rules = loader.rules_for(Department::Workshop);
/// println!("overtime multiplier: {}", rules.overtime_multiplier);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RulesLoader {
    overrides: HashMap<Department, DepartmentRules>,
}

impl RulesLoader {
    /// Creates a loader with built-in defaults only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Creates a loader with the given in-memory overrides.
    ///
    /// Useful for injecting rule sets directly, e.g. in tests.
    pub fn with_overrides(overrides: HashMap<Department, DepartmentRules>) -> Self {
        Self { overrides }
    }

    /// Loads department overrides from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the file is missing and
    /// `ConfigParseError` when it contains invalid YAML. Callers that want
    /// the fail-soft behavior use [`RulesLoader::load_or_builtin`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: RulesFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            overrides: file.departments,
        })
    }

    /// Loads overrides from a YAML file, falling back to built-in defaults
    /// when the file is missing or unreadable.
    ///
    /// A missing rules file must never block payroll.
    pub fn load_or_builtin<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(loader) => loader,
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to built-in department rules");
                Self::builtin()
            }
        }
    }

    /// Resolves the rules for a department.
    ///
    /// Resolution order: YAML override, then the built-in policy table,
    /// then the hard-coded fallback. Never fails.
    pub fn rules_for(&self, department: Department) -> DepartmentRules {
        self.overrides
            .get(&department)
            .cloned()
            .unwrap_or_else(|| DepartmentRules::default_for(department))
    }
}
