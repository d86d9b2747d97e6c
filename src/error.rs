//! Error types for scheduler operations.
//!
//! Every fallible operation validates its arguments before mutating any
//! state, so an `Err` leaves the scheduler exactly as it was.

use thiserror::Error;

use crate::models::{CoreId, JobId, Time};

/// Scheduler operation result.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Contract violations surfaced to the event driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Scheduler requires at least one core")]
    InvalidCoreCount,

    #[error("Job {job} has non-positive runtime {runtime}")]
    InvalidRuntime { job: JobId, runtime: Time },

    #[error("Job {0} is already tracked")]
    DuplicateJob(JobId),

    #[error("Job not found: {0}")]
    UnknownJob(JobId),

    #[error("Core not found: {0}")]
    UnknownCore(CoreId),

    #[error("Job {job} is not running on core {core}")]
    JobNotOnCore { job: JobId, core: CoreId },

    #[error("Event at time {time} precedes scheduler clock {now}")]
    TimeRegression { now: Time, time: Time },

    #[error("Invalid policy '{0}'. Valid: fcfs, sjf, psjf, pri, ppri, rr")]
    UnknownPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SchedulerError::JobNotOnCore { job: 4, core: 1 }.to_string(),
            "Job 4 is not running on core 1"
        );
        assert_eq!(
            SchedulerError::TimeRegression { now: 10, time: 3 }.to_string(),
            "Event at time 3 precedes scheduler clock 10"
        );
        assert!(SchedulerError::UnknownPolicy("edf".into())
            .to_string()
            .contains("'edf'"));
    }
}
