//! Discrete-event CPU scheduler and run statistics.
//!
//! `Scheduler` is a pure decision function over an in-memory job set: the
//! driver reports arrivals, completions and quantum expirations in time
//! order, and the scheduler answers which job runs on which core. It never
//! executes work itself; it only tracks how much runtime each job still owes.
//!
//! # Lifecycle
//!
//! ```text
//! start_up ─▶ { job_arrived | job_finished | quantum_expired }* ─▶ averages ─▶ shut_down
//! ```
//!
//! # Statistics
//!
//! `SchedulerStats` folds each job's waiting, turnaround and response time
//! into running totals when the job finishes.

mod config;
mod engine;
mod snapshot;
mod stats;


pub use config::SchedulerConfig;
pub use engine::Scheduler;
pub use snapshot::QueueEntry;
pub use stats::SchedulerStats;
