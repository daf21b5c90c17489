//! Business-rule checks over a computed salary result.
//!
//! Checks run after the numbers are derived and return their outcomes as
//! data; the engine fails the calculation only when at least one check
//! reports a violation. Because the checks are pure local code, `Decimal`
//! inputs cannot be non-finite; the non-negativity checks carry the
//! remaining weight of the contract.

use rust_decimal::Decimal;

use crate::models::RuleCheck;

fn check(rule: &str, is_valid: bool, message: String) -> RuleCheck {
    RuleCheck {
        rule: rule.to_string(),
        is_valid,
        message: if is_valid { String::new() } else { message },
    }
}

/// Runs every business-rule check over a computed result.
///
/// Returns the outcome of each rule, passing and failing alike, so the
/// full list can be stored with the calculation details.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::run_checks;
/// use rust_decimal::Decimal;
///
/// let checks = run_checks(
///     Decimal::new(30000, 0), // base salary
///     Decimal::new(10, 0),    // overtime hours
///     Decimal::new(500, 0),   // overtime wage
///     Decimal::new(20000, 0), // advance: over the 50% cap
///     Decimal::new(15000, 0), // final salary
///     Decimal::new(50, 0),    // max advance percentage
/// );
/// assert!(checks.iter().any(|c| !c.is_valid));
/// ```
pub fn run_checks(
    base_salary: Decimal,
    overtime_hours: Decimal,
    overtime_wage: Decimal,
    advance_amount: Decimal,
    final_salary: Decimal,
    max_advance_percentage: Decimal,
) -> Vec<RuleCheck> {
    let advance_cap = base_salary * max_advance_percentage / Decimal::new(100, 0);

    vec![
        check(
            "advance_within_cap",
            advance_amount <= advance_cap,
            format!(
                "Advance amount {} exceeds {}% of base salary {}",
                advance_amount, max_advance_percentage, base_salary
            ),
        ),
        check(
            "base_salary_non_negative",
            base_salary >= Decimal::ZERO,
            format!("Base salary {} is negative", base_salary),
        ),
        check(
            "overtime_hours_non_negative",
            overtime_hours >= Decimal::ZERO,
            format!("Overtime hours {} are negative", overtime_hours),
        ),
        check(
            "overtime_wage_non_negative",
            overtime_wage >= Decimal::ZERO,
            format!("Overtime wage {} is negative", overtime_wage),
        ),
        check(
            "final_salary_non_negative",
            final_salary >= Decimal::ZERO,
            format!("Final salary {} is negative", final_salary),
        ),
    ]
}

/// Concatenates the messages of every failed check, or `None` when all
/// checks passed.
pub fn violation_message(checks: &[RuleCheck]) -> Option<String> {
    let violations: Vec<&str> = checks
        .iter()
        .filter(|c| !c.is_valid)
        .map(|c| c.message.as_str())
        .collect();

    if violations.is_empty() {
        None
    } else {
        Some(violations.join("; "))
    }
}
