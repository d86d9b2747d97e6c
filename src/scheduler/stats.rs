//! Run statistics.
//!
//! Accumulates per-job timings as jobs finish and reports run averages.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - total runtime |
//! | Response | first dispatch - arrival |
//! | Makespan | latest completion time |
//!
//! Averages divide by the number of jobs that have *arrived*, so they are
//! only meaningful once every arrived job has finished.

use serde::{Deserialize, Serialize};

use crate::models::{Job, Time};

/// Running totals for one simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Jobs that have arrived.
    pub arrived: u64,
    /// Jobs that have finished.
    pub completed: u64,
    /// Sum of waiting times.
    pub total_waiting: Time,
    /// Sum of turnaround times.
    pub total_turnaround: Time,
    /// Sum of response times.
    pub total_response: Time,
    /// Latest completion time seen.
    pub makespan: Time,
}

impl SchedulerStats {
    /// Counts one arrival.
    pub(crate) fn record_arrival(&mut self) {
        self.arrived += 1;
    }

    /// Folds a finished job's timings into the totals.
    pub(crate) fn record_completion(&mut self, job: &Job, finish_time: Time) {
        let turnaround = finish_time - job.arrival_time;
        // A job finishing on the tick it is dispatched never ran late.
        let first_dispatch = job.first_dispatch.unwrap_or(job.arrival_time);

        self.completed += 1;
        self.total_turnaround += turnaround;
        self.total_waiting += turnaround - job.run_time;
        self.total_response += first_dispatch - job.arrival_time;
        self.makespan = self.makespan.max(finish_time);
    }

    /// Average waiting time over arrived jobs.
    pub fn average_waiting_time(&self) -> f64 {
        self.average(self.total_waiting)
    }

    /// Average turnaround time over arrived jobs.
    pub fn average_turnaround_time(&self) -> f64 {
        self.average(self.total_turnaround)
    }

    /// Average response time over arrived jobs.
    pub fn average_response_time(&self) -> f64 {
        self.average(self.total_response)
    }

    /// Whether every arrived job has finished.
    pub fn is_drained(&self) -> bool {
        self.arrived == self.completed
    }

    fn average(&self, total: Time) -> f64 {
        if self.arrived == 0 {
            0.0
        } else {
            total as f64 / self.arrived as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(id: u64, arrival: Time, run: Time, first: Time) -> Job {
        let mut job = Job::new(id, arrival, run, 0);
        job.first_dispatch = Some(first);
        job
    }

    #[test]
    fn test_stats_basic() {
        let mut stats = SchedulerStats::default();
        stats.record_arrival();
        stats.record_arrival();

        // J1: arrives 0, runs 0..5
        stats.record_completion(&finished(1, 0, 5, 0), 5);
        // J2: arrives 1, waits until 5, runs 5..8
        stats.record_completion(&finished(2, 1, 3, 5), 8);

        assert_eq!(stats.total_turnaround, 5 + 7);
        assert_eq!(stats.total_waiting, 4);
        assert_eq!(stats.total_response, 4);
        assert_eq!(stats.makespan, 8);
        assert!((stats.average_turnaround_time() - 6.0).abs() < 1e-10);
        assert!((stats.average_waiting_time() - 2.0).abs() < 1e-10);
        assert!((stats.average_response_time() - 2.0).abs() < 1e-10);
        assert!(stats.is_drained());
    }

    #[test]
    fn test_stats_empty() {
        let stats = SchedulerStats::default();
        assert!((stats.average_waiting_time() - 0.0).abs() < 1e-10);
        assert!((stats.average_turnaround_time() - 0.0).abs() < 1e-10);
        assert!((stats.average_response_time() - 0.0).abs() < 1e-10);
        assert!(stats.is_drained());
    }

    #[test]
    fn test_stats_not_drained() {
        let mut stats = SchedulerStats::default();
        stats.record_arrival();
        assert!(!stats.is_drained());
    }
}
