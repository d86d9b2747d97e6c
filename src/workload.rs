//! Seeded synthetic workloads.
//!
//! Produces job descriptions for simulations and benchmarks: ids count up
//! from 1 and arrival times strictly increase, so every generated workload
//! satisfies the driver's unique-arrival contract.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{JobSpec, Priority, Time};

/// Random job stream generator.
///
/// # Example
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let jobs = WorkloadGenerator::new(7)
///     .with_jobs(20)
///     .with_runtime(1, 10)
///     .generate();
/// assert_eq!(jobs.len(), 20);
/// assert!(jobs.windows(2).all(|w| w[0].arrival_time < w[1].arrival_time));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// RNG seed.
    pub seed: u64,
    /// Number of jobs to produce.
    pub jobs: usize,
    /// Time of the first arrival.
    pub start_time: Time,
    /// Inclusive range of gaps between consecutive arrivals (min ≥ 1).
    pub gap: (Time, Time),
    /// Inclusive runtime range (min ≥ 1).
    pub runtime: (Time, Time),
    /// Inclusive priority range.
    pub priority: (Priority, Priority),
}

impl WorkloadGenerator {
    /// Ten jobs, gaps 1..=5, runtimes 1..=10, priorities 0..=4.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            jobs: 10,
            start_time: 0,
            gap: (1, 5),
            runtime: (1, 10),
            priority: (0, 4),
        }
    }

    /// Sets the job count.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Sets the first arrival time.
    pub fn with_start_time(mut self, start_time: Time) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the inter-arrival gap range. Bounds are clamped to at least 1.
    pub fn with_gap(mut self, min: Time, max: Time) -> Self {
        self.gap = ordered(min.max(1), max.max(1));
        self
    }

    /// Sets the runtime range. Bounds are clamped to at least 1.
    pub fn with_runtime(mut self, min: Time, max: Time) -> Self {
        self.runtime = ordered(min.max(1), max.max(1));
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, min: Priority, max: Priority) -> Self {
        self.priority = ordered(min, max);
        self
    }

    /// Generates the job stream.
    pub fn generate(&self) -> Vec<JobSpec> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut specs = Vec::with_capacity(self.jobs);
        let mut arrival = self.start_time;

        for i in 0..self.jobs {
            if i > 0 {
                arrival += rng.random_range(self.gap.0..=self.gap.1);
            }
            let run_time = rng.random_range(self.runtime.0..=self.runtime.1);
            let priority = rng.random_range(self.priority.0..=self.priority.1);

            specs.push(JobSpec::new(i as u64 + 1, arrival, run_time).with_priority(priority));
        }

        specs
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
