//! CPU scheduling simulator core for the U-Engine ecosystem.
//!
//! Decides, at each event reported by an external driver, which job runs on
//! which core, and accumulates waiting, turnaround and response statistics.
//! The driver owns the clock and the quantum length; this crate owns only
//! the scheduling decisions.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `JobSpec`, `Core`, `Policy`
//! - **`ordered_set`**: Comparator-ranked container shared by every policy
//! - **`scheduler`**: `Scheduler`, `SchedulerConfig`, `SchedulerStats`
//! - **`workload`**: Seeded synthetic job streams
//! - **`validation`**: Workload integrity checks (duplicate IDs/arrivals, runtimes)
//!
//! # Policies
//!
//! FCFS, SJF, PSJF (preemptive SJF), PRI, PPRI (preemptive priority) and RR.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

pub mod error;
pub mod models;
pub mod ordered_set;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SchedulerError, SchedulerResult};
pub use models::{Job, JobSpec, Policy};
pub use scheduler::{Scheduler, SchedulerConfig, SchedulerStats};
