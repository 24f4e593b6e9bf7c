//! Input validation for planning runs.
//!
//! Checks structural integrity of workloads and the capacity table before
//! balancing. Detects:
//! - Duplicate workload IDs
//! - Fractions outside (0, 1] (including NaN/infinity)
//! - Non-positive or non-finite machine bandwidths
//! - A non-empty workload set with no machines to place it on
//!
//! The balancer itself only checks its aggregate-capacity precondition;
//! everything per-entry belongs here.

use crate::models::{CapacityTable, Workload};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workloads share the same ID.
    DuplicateId,
    /// A workload fraction is zero, negative, or not finite.
    NonPositiveFraction,
    /// A workload fraction exceeds 1 (more than the total work).
    ExcessiveFraction,
    /// A machine bandwidth is zero, negative, or not finite.
    NonPositiveBandwidth,
    /// There are workloads to place but no machines.
    NoMachines,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a planning run.
///
/// Checks:
/// 1. No duplicate workload IDs
/// 2. All fractions are finite and in (0, 1]
/// 3. All bandwidths are finite and positive
/// 4. At least one machine exists when there is work to place
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workloads: &[Workload], capacities: &CapacityTable) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for w in workloads {
        if !ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate workload ID: {}", w.id),
            ));
        }

        if !w.fraction.is_finite() || w.fraction <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveFraction,
                format!("Workload '{}' has non-positive fraction {}", w.id, w.fraction),
            ));
        } else if w.fraction > 1.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExcessiveFraction,
                format!("Workload '{}' has fraction {} > 1", w.id, w.fraction),
            ));
        }
    }

    for (id, bandwidth) in capacities.iter() {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBandwidth,
                format!("Machine '{id}' has non-positive bandwidth {bandwidth}"),
            ));
        }
    }

    if capacities.is_empty() && !workloads.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            format!("{} workloads but no machines", workloads.len()),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workloads() -> Vec<Workload> {
        vec![
            Workload::new("sim-a", 0.2),
            Workload::new("sim-b", 0.3),
            Workload::new("sim-c", 0.5),
        ]
    }

    fn sample_capacities() -> CapacityTable {
        CapacityTable::new()
            .with_machine("m1", 0.6)
            .with_machine("m2", 0.5)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_workloads(), &sample_capacities()).is_ok());
    }

    #[test]
    fn test_duplicate_workload_id() {
        let workloads = vec![Workload::new("sim-a", 0.2), Workload::new("sim-a", 0.3)];
        let errors = validate_input(&workloads, &sample_capacities()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_fraction() {
        let workloads = vec![Workload::new("zero", 0.0), Workload::new("neg", -0.1)];
        let errors = validate_input(&workloads, &sample_capacities()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveFraction)
                .count(),
            2
        );
    }

    #[test]
    fn test_nan_fraction_rejected() {
        let workloads = vec![Workload::new("nan", f64::NAN)];
        let errors = validate_input(&workloads, &sample_capacities()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveFraction));
    }

    #[test]
    fn test_excessive_fraction() {
        let workloads = vec![Workload::new("big", 1.5)];
        let errors = validate_input(&workloads, &sample_capacities()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ExcessiveFraction));
    }

    #[test]
    fn test_non_positive_bandwidth() {
        let capacities = CapacityTable::new()
            .with_machine("ok", 0.5)
            .with_machine("dead", 0.0);
        let errors = validate_input(&sample_workloads(), &capacities).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBandwidth
                && e.message.contains("dead")));
    }

    #[test]
    fn test_no_machines() {
        let errors = validate_input(&sample_workloads(), &CapacityTable::new()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoMachines));
    }

    #[test]
    fn test_empty_everything_is_valid() {
        assert!(validate_input(&[], &CapacityTable::new()).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let workloads = vec![Workload::new("a", -1.0), Workload::new("a", 2.0)];
        let errors = validate_input(&workloads, &CapacityTable::new()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
