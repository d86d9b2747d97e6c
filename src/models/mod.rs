//! CPU scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `JobSpec` | Arrival description supplied by the driver |
//! | `Job` | Live scheduler record of an unfinished job |
//! | `Core` | Execution unit and its occupant |
//! | `Policy` | Ranking rule shared by the job set |
//!
//! All times are integer ticks of the driver's simulation clock.

mod cores;
mod job;
mod policy;

pub use cores::Core;
pub use job::{Job, JobSpec};
pub use policy::Policy;

/// Job identifier, assigned by the driver.
pub type JobId = u64;

/// Zero-based core index.
pub type CoreId = usize;

/// Simulation time in ticks.
pub type Time = i64;

/// Job priority (lower = more urgent).
pub type Priority = i32;
