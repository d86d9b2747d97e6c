//! Read-only views of scheduler state for trace output.

use serde::{Deserialize, Serialize};

use crate::models::{CoreId, Job, JobId, Time};

/// One job's line in a queue dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Job identifier.
    pub job_id: JobId,
    /// Core the job runs on, `None` while waiting.
    pub core: Option<CoreId>,
    /// Remaining runtime as of the job's last charge.
    pub remaining: Time,
}

impl From<&Job> for QueueEntry {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id,
            core: job.core,
            remaining: job.remaining,
        }
    }
}
