//! Intake validation.
//!
//! The engine assumes names are usable as schedule entries but enforces
//! nothing about them. This pass gives intake layers the checks to run
//! before assignment starts:
//! - empty (or whitespace-only) names
//! - duplicate names, which make schedule entries ambiguous
//!
//! All issues are collected and reported together; callers decide
//! whether any of them abort the run.

use std::collections::HashSet;

use crate::models::Roster;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single intake issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Issue category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of intake issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An employee name is empty or whitespace-only.
    EmptyName,
    /// Two employees share the same name.
    DuplicateName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a roster for empty and duplicate names.
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` with every
/// detected issue otherwise.
pub fn validate_intake(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (position, employee) in roster.iter().enumerate() {
        if employee.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Employee #{} has an empty name", position + 1),
            ));
            continue;
        }
        if !seen.insert(employee.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", employee.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
