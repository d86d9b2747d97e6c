//! Input validation for job workloads.
//!
//! The scheduler trusts its driver: arrival times are unique and runtimes
//! positive. A driver replaying a workload from outside can check it here
//! first and get every problem reported at once. Detects:
//! - Duplicate job IDs
//! - Duplicate arrival times
//! - Non-positive runtimes
//!
//! Any integer time is a valid arrival, negative ones included.

use std::collections::HashSet;

use crate::models::JobSpec;

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
    /// Two jobs share the same ID.
    DuplicateId,
    /// Two jobs arrive at the same time.
    DuplicateArrivalTime,
    /// A job needs zero or negative runtime.
    InvalidRuntime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload before it is fed to a scheduler.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(jobs: &[JobSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut arrivals = HashSet::new();

    for job in jobs {
        if !ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if !arrivals.insert(job.arrival_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateArrivalTime,
                format!(
                    "Job {} arrives at {}, already taken by another job",
                    job.id, job.arrival_time
                ),
            ));
        }

        if job.run_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRuntime,
                format!("Job {} has non-positive runtime {}", job.id, job.run_time),
            ));
        }
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
    use crate::workload::WorkloadGenerator;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_workload() {
        let jobs = vec![JobSpec::new(1, 0, 5), JobSpec::new(2, 1, 3)];
        assert!(validate_workload(&jobs).is_ok());
    }

    #[test]
    fn test_generated_workload_is_valid() {
        let jobs = WorkloadGenerator::new(9).with_jobs(200).generate();
        assert!(validate_workload(&jobs).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let jobs = vec![JobSpec::new(1, 0, 5), JobSpec::new(1, 1, 3)];
        assert_eq!(kinds(validate_workload(&jobs)), vec![ValidationErrorKind::DuplicateId]);
    }

    #[test]
    fn test_duplicate_arrival_time() {
        let jobs = vec![JobSpec::new(1, 4, 5), JobSpec::new(2, 4, 3)];
        let errors = validate_workload(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateArrivalTime);
        assert!(errors[0].message.contains("Job 2"));
    }

    #[test]
    fn test_invalid_runtime() {
        let jobs = vec![JobSpec::new(1, 0, 0), JobSpec::new(2, 1, -4)];
        assert_eq!(
            kinds(validate_workload(&jobs)),
            vec![
                ValidationErrorKind::InvalidRuntime,
                ValidationErrorKind::InvalidRuntime
            ]
        );
    }

    #[test]
    fn test_negative_arrival_accepted() {
        let jobs = vec![JobSpec::new(1, -4, 2), JobSpec::new(2, -1, 2)];
        assert!(validate_workload(&jobs).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let jobs = vec![
            JobSpec::new(1, 0, 5),
            JobSpec::new(1, 0, 0),
        ];
        let errors = validate_workload(&jobs).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_empty_workload() {
        assert!(validate_workload(&[]).is_ok());
    }
}
