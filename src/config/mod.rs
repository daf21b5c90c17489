//! Department calculation rules: types, built-in defaults, and the
//! YAML override loader.

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::DepartmentRules;
