//! Job model.
//!
//! A `JobSpec` is the static description of a job as the driver sees it;
//! a `Job` is the scheduler's live record of it, carrying the runtime
//! bookkeeping that changes as the job is dispatched and preempted.

use serde::{Deserialize, Serialize};

use super::{CoreId, JobId, Priority, Time};
use crate::ordered_set::Keyed;

/// Static description of a job arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Unique job identifier.
    pub id: JobId,
    /// Arrival time.
    pub arrival_time: Time,
    /// Total required runtime.
    pub run_time: Time,
    /// Scheduling priority (lower = more urgent).
    pub priority: Priority,
}

impl JobSpec {
    /// Creates a job description with priority 0.
    pub fn new(id: JobId, arrival_time: Time, run_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            run_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// A job tracked by the scheduler between arrival and completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Arrival time.
    pub arrival_time: Time,
    /// Total required runtime.
    pub run_time: Time,
    /// Scheduling priority (lower = more urgent).
    pub priority: Priority,
    /// Runtime still owed, as of the last time the job was charged.
    pub remaining: Time,
    /// Core the job occupies, `None` while waiting.
    pub core: Option<CoreId>,
    /// When the job last started running.
    pub start_time: Option<Time>,
    /// When the job was last paused (preempted, or waiting since arrival).
    pub pause_time: Option<Time>,
    /// When the job was first given a core.
    pub first_dispatch: Option<Time>,
}

impl Job {
    /// Creates a waiting job from its arrival attributes.
    pub fn new(id: JobId, arrival_time: Time, run_time: Time, priority: Priority) -> Self {
        Self {
            id,
            arrival_time,
            run_time,
            priority,
            remaining: run_time,
            core: None,
            start_time: None,
            pause_time: Some(arrival_time),
            first_dispatch: None,
        }
    }

    /// Whether the job currently occupies a core.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.core.is_some()
    }

    /// Whether the job has ever been dispatched.
    #[inline]
    pub fn has_responded(&self) -> bool {
        self.first_dispatch.is_some()
    }

    /// Remaining runtime projected to `now`, without charging the job.
    pub fn remaining_at(&self, now: Time) -> Time {
        match (self.core, self.start_time) {
            (Some(_), Some(start)) => (self.remaining - (now - start)).max(0),
            _ => self.remaining,
        }
    }

    /// Charges the runtime consumed since the last start and restarts the
    /// running interval at `now`. Returns the amount charged.
    pub(crate) fn charge(&mut self, now: Time) -> Time {
        let Some(start) = self.start_time else {
            return 0;
        };
        let elapsed = (now - start).clamp(0, self.remaining);
        self.remaining -= elapsed;
        self.start_time = Some(now);
        elapsed
    }

    /// Gives the job `core` starting at `now`; returns `true` on first dispatch.
    pub(crate) fn dispatch(&mut self, core: CoreId, now: Time) -> bool {
        self.core = Some(core);
        self.start_time = Some(now);
        self.pause_time = None;
        if self.first_dispatch.is_none() {
            self.first_dispatch = Some(now);
            true
        } else {
            false
        }
    }

    /// Takes the job off its core at `now`.
    pub(crate) fn pause(&mut self, now: Time) {
        self.core = None;
        self.pause_time = Some(now);
    }
}

impl From<&JobSpec> for Job {
    fn from(spec: &JobSpec) -> Self {
        Self::new(spec.id, spec.arrival_time, spec.run_time, spec.priority)
    }
}

impl Keyed for Job {
    type Key = JobId;

    fn key(&self) -> JobId {
        self.id
    }
}
