//! Scheduling policies and their ranking rules.
//!
//! Each policy ranks jobs by one key and breaks ties by earlier arrival.
//! Arrival times are unique, so every policy except round-robin is a total
//! order. Round-robin ranks all jobs equal, which the ordered set turns into
//! insertion (FIFO) order.
//!
//! | Policy | Primary key | Preemptive |
//! |--------|-------------|------------|
//! | FCFS | arrival time | no |
//! | SJF | total runtime | no |
//! | PSJF | remaining runtime | yes |
//! | PRI | priority | no |
//! | PPRI | priority | yes |
//! | RR | none (FIFO) | on quantum expiry |

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Job;
use crate::error::SchedulerError;

/// Scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    /// First-come, first-served.
    #[default]
    Fcfs,
    /// Shortest job first.
    Sjf,
    /// Preemptive shortest (remaining) job first.
    Psjf,
    /// Priority, lower value first.
    Pri,
    /// Preemptive priority.
    Ppri,
    /// Round-robin; the quantum is enforced by the driver.
    Rr,
}

impl Policy {
    /// All policies, in declaration order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Psjf,
        Policy::Pri,
        Policy::Ppri,
        Policy::Rr,
    ];

    /// Ranks `a` against `b`; `Less` means `a` should run first.
    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        let primary = match self {
            Self::Fcfs => Ordering::Equal,
            Self::Sjf => a.run_time.cmp(&b.run_time),
            Self::Psjf => a.remaining.cmp(&b.remaining),
            Self::Pri | Self::Ppri => a.priority.cmp(&b.priority),
            Self::Rr => return Ordering::Equal,
        };
        primary.then_with(|| a.arrival_time.cmp(&b.arrival_time))
    }

    /// Whether an arrival may take a core from a running job.
    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Psjf | Self::Ppri)
    }

    /// Whether the driver should deliver quantum expirations.
    #[inline]
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::Rr)
    }

    /// Whether the rank depends on runtime consumed so far.
    #[inline]
    pub const fn ranks_by_remaining(&self) -> bool {
        matches!(self, Self::Psjf)
    }

    /// Short upper-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Psjf => "PSJF",
            Self::Pri => "PRI",
            Self::Ppri => "PPRI",
            Self::Rr => "RR",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "psjf" | "srtf" => Ok(Self::Psjf),
            "pri" | "priority" => Ok(Self::Pri),
            "ppri" | "preemptive_priority" => Ok(Self::Ppri),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::Rr),
            _ => Err(SchedulerError::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, arrival: i64, run: i64, priority: i32) -> Job {
        Job::new(id, arrival, run, priority)
    }

    #[test]
    fn test_fcfs_orders_by_arrival() {
        let early = job(1, 0, 9, 9);
        let late = job(2, 5, 1, 0);
        assert_eq!(Policy::Fcfs.compare(&early, &late), Ordering::Less);
    }

    #[test]
    fn test_sjf_orders_by_runtime_then_arrival() {
        let short = job(1, 5, 2, 0);
        let long = job(2, 0, 8, 0);
        assert_eq!(Policy::Sjf.compare(&short, &long), Ordering::Less);

        let tie_early = job(3, 1, 4, 0);
        let tie_late = job(4, 2, 4, 0);
        assert_eq!(Policy::Sjf.compare(&tie_late, &tie_early), Ordering::Greater);
    }

    #[test]
    fn test_psjf_uses_remaining() {
        let mut a = job(1, 0, 10, 0);
        let b = job(2, 1, 5, 0);
        assert_eq!(Policy::Psjf.compare(&a, &b), Ordering::Greater);
        a.remaining = 3;
        assert_eq!(Policy::Psjf.compare(&a, &b), Ordering::Less);
        // SJF ignores consumed runtime.
        assert_eq!(Policy::Sjf.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_priority_lower_value_first() {
        let urgent = job(1, 9, 5, 1);
        let relaxed = job(2, 0, 5, 4);
        assert_eq!(Policy::Pri.compare(&urgent, &relaxed), Ordering::Less);
        assert_eq!(Policy::Ppri.compare(&urgent, &relaxed), Ordering::Less);
    }

    #[test]
    fn test_rr_is_unordered() {
        let a = job(1, 0, 1, 0);
        let b = job(2, 5, 9, 9);
        assert_eq!(Policy::Rr.compare(&a, &b), Ordering::Equal);
        assert_eq!(Policy::Rr.compare(&b, &a), Ordering::Equal);
    }

    #[test]
    fn test_flags() {
        let preemptive: Vec<_> = Policy::ALL.iter().filter(|p| p.is_preemptive()).collect();
        assert_eq!(preemptive, vec![&Policy::Psjf, &Policy::Ppri]);
        assert!(Policy::Rr.uses_quantum());
        assert!(!Policy::Fcfs.uses_quantum());
        assert!(Policy::Psjf.ranks_by_remaining());
        assert!(!Policy::Ppri.ranks_by_remaining());
    }

    #[test]
    fn test_parse() {
        assert_eq!("FCFS".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("round_robin".parse::<Policy>().unwrap(), Policy::Rr);
        assert_eq!("Ppri".parse::<Policy>().unwrap(), Policy::Ppri);
        assert_eq!(
            "edf".parse::<Policy>(),
            Err(SchedulerError::UnknownPolicy("edf".into()))
        );
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Policy::Psjf).unwrap(), "\"PSJF\"");
        let parsed: Policy = serde_json::from_str("\"RR\"").unwrap();
        assert_eq!(parsed, Policy::Rr);
    }
}
