//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::models::Policy;

/// Start-up parameters for a simulation run.
///
/// # Example
/// ```
/// use u_cpusched::models::Policy;
/// use u_cpusched::scheduler::SchedulerConfig;
///
/// let config = SchedulerConfig::new()
///     .with_cores(4)
///     .with_policy(Policy::Psjf);
/// assert_eq!(config.cores, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Number of cores, indexed `0..cores`.
    pub cores: usize,
    /// Active policy.
    #[serde(default)]
    pub policy: Policy,
}

impl SchedulerConfig {
    /// One core, FCFS.
    pub fn new() -> Self {
        Self {
            cores: 1,
            policy: Policy::Fcfs,
        }
    }

    /// Sets the core count.
    pub fn with_cores(mut self, cores: usize) -> Self {
        self.cores = cores;
        self
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}
