//! Event-driven multi-core scheduler.
//!
//! # Model
//!
//! Every unfinished job lives in one `OrderedSet`, ranked by the active
//! policy. Running and waiting jobs share the set; a job is running exactly
//! when it carries a core index, and that core names it as occupant.
//!
//! # Events
//!
//! 1. **Arrival**: take the lowest idle core; otherwise, under a preemptive
//!    policy, take the core of the worst-ranked running job if the newcomer
//!    outranks it; otherwise wait.
//! 2. **Completion**: fold the job's timings into the statistics and hand the
//!    core to the best-ranked waiting job.
//! 3. **Quantum expiry** (RR only): requeue the running job at the tail and
//!    hand the core to the head of the waiting line.
//!
//! Elapsed runtime is charged to a running job in one place (`charge_core`)
//! whenever its occupancy changes, and the job is re-ranked if the policy
//! depends on remaining runtime. Under PSJF and PPRI every running job is
//! charged before an arrival is ranked against them.

use tracing::{debug, info, instrument, trace, warn};

use super::{QueueEntry, SchedulerConfig, SchedulerStats};
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Core, CoreId, Job, JobId, JobSpec, Policy, Priority, Time};
use crate::ordered_set::OrderedSet;

/// Scheduler state for one simulation run.
///
/// # Example
/// ```
/// use u_cpusched::models::Policy;
/// use u_cpusched::scheduler::Scheduler;
///
/// let mut scheduler = Scheduler::start_up(1, Policy::Fcfs).unwrap();
/// assert_eq!(scheduler.job_arrived(1, 0, 5, 0).unwrap(), Some(0));
/// assert_eq!(scheduler.job_arrived(2, 1, 3, 0).unwrap(), None);
/// assert_eq!(scheduler.job_finished(0, 1, 5).unwrap(), Some(2));
/// assert_eq!(scheduler.job_finished(0, 2, 8).unwrap(), None);
///
/// let stats = scheduler.shut_down();
/// assert!((stats.average_turnaround_time() - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct Scheduler {
    policy: Policy,
    cores: Vec<Core>,
    jobs: OrderedSet<Job>,
    stats: SchedulerStats,
    now: Option<Time>,
}

impl Scheduler {
    /// Creates a scheduler with every core idle.
    pub fn new(config: SchedulerConfig) -> SchedulerResult<Self> {
        if config.cores == 0 {
            return Err(SchedulerError::InvalidCoreCount);
        }

        let policy = config.policy;
        info!(cores = config.cores, %policy, "Scheduler started");

        Ok(Self {
            policy,
            cores: (0..config.cores).map(Core::new).collect(),
            jobs: OrderedSet::new(move |a: &Job, b: &Job| policy.compare(a, b)),
            stats: SchedulerStats::default(),
            now: None,
        })
    }

    /// Shorthand for `Scheduler::new` with `cores` and `policy`.
    pub fn start_up(cores: usize, policy: Policy) -> SchedulerResult<Self> {
        Self::new(
            SchedulerConfig::new()
                .with_cores(cores)
                .with_policy(policy),
        )
    }

    /// Handles a job arrival.
    ///
    /// Returns the core the job should run on from now, or `None` if no
    /// scheduling change is needed. When the returned core was busy, its
    /// previous job has been preempted.
    #[instrument(level = "debug", skip(self))]
    pub fn job_arrived(
        &mut self,
        job_id: JobId,
        time: Time,
        run_time: Time,
        priority: Priority,
    ) -> SchedulerResult<Option<CoreId>> {
        if run_time <= 0 {
            return Err(SchedulerError::InvalidRuntime {
                job: job_id,
                runtime: run_time,
            });
        }
        if self.jobs.position(&job_id).is_some() {
            return Err(SchedulerError::DuplicateJob(job_id));
        }
        self.advance_clock(time)?;
        self.stats.record_arrival();

        let job = Job::new(job_id, time, run_time, priority);

        if let Some(core) = self.idle_core() {
            let index = self.jobs.insert(job);
            self.dispatch(index, core, time);
            return Ok(Some(core));
        }

        if !self.policy.is_preemptive() {
            self.jobs.insert(job);
            debug!(job = job_id, time, "All cores busy, job queued");
            return Ok(None);
        }

        // Bring running jobs up to date before ranking the newcomer against
        // them; under PSJF this also re-ranks them on what they still owe.
        for core in 0..self.cores.len() {
            self.charge_core(core, time);
        }

        let index = self.jobs.insert(job);
        let Some(core) = self.worst_running_behind(index) else {
            debug!(job = job_id, time, "Job queued behind running jobs");
            return Ok(None);
        };

        self.preempt(core, time);
        if let Some(index) = self.jobs.position(&job_id) {
            self.dispatch(index, core, time);
        }
        Ok(Some(core))
    }

    /// Forwards a job description to [`Scheduler::job_arrived`].
    pub fn admit(&mut self, spec: &JobSpec) -> SchedulerResult<Option<CoreId>> {
        self.job_arrived(spec.id, spec.arrival_time, spec.run_time, spec.priority)
    }

    /// Handles completion of `job_id` on `core_id`.
    ///
    /// Returns the job that takes over the core, or `None` if it goes idle.
    #[instrument(level = "debug", skip(self))]
    pub fn job_finished(
        &mut self,
        core_id: CoreId,
        job_id: JobId,
        time: Time,
    ) -> SchedulerResult<Option<JobId>> {
        self.check_core(core_id)?;
        let running_on = self
            .job(job_id)
            .ok_or(SchedulerError::UnknownJob(job_id))?
            .core;
        if running_on != Some(core_id) {
            return Err(SchedulerError::JobNotOnCore {
                job: job_id,
                core: core_id,
            });
        }
        self.advance_clock(time)?;

        self.charge_core(core_id, time);
        self.cores[core_id].occupant = None;

        if let Some(mut job) = self.jobs.take(&job_id) {
            if job.remaining != 0 {
                warn!(
                    job = job_id,
                    remaining = job.remaining,
                    time,
                    "Job finished with runtime still owed"
                );
            }
            job.remaining = 0;
            self.stats.record_completion(&job, time);
            debug!(job = job_id, core = core_id, time, "Job finished");
        }

        Ok(self.dispatch_next(core_id, time))
    }

    /// Handles expiry of the round-robin quantum on `core_id`.
    ///
    /// The running job goes to the back of the line and the core is given to
    /// the first waiting job, which is the same job again when nothing else
    /// waits. Under any other policy this is a no-op returning `None`.
    #[instrument(level = "debug", skip(self))]
    pub fn quantum_expired(&mut self, core_id: CoreId, time: Time) -> SchedulerResult<Option<JobId>> {
        self.check_core(core_id)?;
        self.advance_clock(time)?;

        if !self.policy.uses_quantum() {
            trace!(core = core_id, time, policy = %self.policy, "Quantum ignored");
            return Ok(None);
        }

        let Some(job_id) = self.cores[core_id].occupant else {
            trace!(core = core_id, time, "Quantum expired on idle core");
            return Ok(None);
        };

        self.charge_core(core_id, time);
        self.cores[core_id].occupant = None;

        if let Some(mut job) = self.jobs.take(&job_id) {
            job.pause(time);
            self.jobs.insert(job);
            debug!(job = job_id, core = core_id, time, "Quantum expired, job requeued");
        }

        Ok(self.dispatch_next(core_id, time))
    }

    /// Average waiting time over every arrived job.
    pub fn average_waiting_time(&self) -> f64 {
        self.stats.average_waiting_time()
    }

    /// Average turnaround time over every arrived job.
    pub fn average_turnaround_time(&self) -> f64 {
        self.stats.average_turnaround_time()
    }

    /// Average response time over every arrived job.
    pub fn average_response_time(&self) -> f64 {
        self.stats.average_response_time()
    }

    /// Releases all jobs and cores, returning the final statistics.
    pub fn shut_down(mut self) -> SchedulerStats {
        if !self.jobs.is_empty() {
            warn!(
                unfinished = self.jobs.len(),
                "Scheduler shut down with unfinished jobs"
            );
        }
        self.jobs.clear();
        self.cores.clear();
        info!(
            arrived = self.stats.arrived,
            completed = self.stats.completed,
            "Scheduler shut down"
        );
        self.stats
    }

    /// Active policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of cores.
    pub fn core_count(&self) -> usize {
        self.cores.len()
    }

    /// All cores, by index.
    pub fn cores(&self) -> &[Core] {
        &self.cores
    }

    /// Time of the latest event handled, `None` before the first event.
    pub fn now(&self) -> Option<Time> {
        self.now
    }

    /// Looks up an unfinished job.
    pub fn job(&self, job_id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    /// Job currently running on `core_id`.
    pub fn running_job(&self, core_id: CoreId) -> Option<&Job> {
        let job_id = self.cores.get(core_id)?.occupant?;
        self.job(job_id)
    }

    /// Unfinished jobs in scheduling order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> + '_ {
        self.jobs.iter()
    }

    /// Number of jobs waiting for a core.
    pub fn waiting_count(&self) -> usize {
        self.jobs.iter().filter(|job| !job.is_running()).count()
    }

    /// Number of unfinished jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no jobs are tracked.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Accumulated statistics.
    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    /// Queue contents in scheduling order, for state dumps.
    pub fn snapshot(&self) -> Vec<QueueEntry> {
        self.jobs.iter().map(QueueEntry::from).collect()
    }

    fn check_core(&self, core_id: CoreId) -> SchedulerResult<()> {
        if core_id < self.cores.len() {
            Ok(())
        } else {
            Err(SchedulerError::UnknownCore(core_id))
        }
    }

    fn advance_clock(&mut self, time: Time) -> SchedulerResult<()> {
        if let Some(now) = self.now.filter(|&now| time < now) {
            return Err(SchedulerError::TimeRegression { now, time });
        }
        self.now = Some(time);
        Ok(())
    }

    fn idle_core(&self) -> Option<CoreId> {
        self.cores.iter().find(|core| core.is_idle()).map(|core| core.id)
    }

    /// Charges elapsed runtime to the job on `core` and re-ranks it when the
    /// policy orders by remaining runtime.
    fn charge_core(&mut self, core: CoreId, time: Time) {
        let Some(job_id) = self.cores[core].occupant else {
            return;
        };
        let Some(index) = self.jobs.position(&job_id) else {
            return;
        };
        if self.policy.ranks_by_remaining() {
            self.jobs.update(index, |job| {
                job.charge(time);
            });
        } else {
            // Rank keys are static; charging cannot break the order.
            self.jobs.update_in_place(index, |job| {
                job.charge(time);
            });
        }
    }

    /// Core of the lowest-ranked running job placed after `index`.
    fn worst_running_behind(&self, index: usize) -> Option<CoreId> {
        self.jobs
            .iter()
            .skip(index + 1)
            .filter_map(|job| job.core)
            .last()
    }

    fn preempt(&mut self, core: CoreId, time: Time) {
        self.charge_core(core, time);
        let Some(job_id) = self.cores[core].occupant.take() else {
            return;
        };
        if let Some(index) = self.jobs.position(&job_id) {
            self.jobs.update(index, |job| job.pause(time));
        }
        debug!(job = job_id, core, time, "Job preempted");
    }

    fn dispatch(&mut self, index: usize, core: CoreId, time: Time) -> Option<JobId> {
        let mut dispatched = None;
        self.jobs.update(index, |job| {
            let first = job.dispatch(core, time);
            dispatched = Some((job.id, first));
        });

        let (job_id, first) = dispatched?;
        self.cores[core].occupant = Some(job_id);
        debug!(job = job_id, core, time, first, "Job dispatched");
        Some(job_id)
    }

    /// Gives `core` to the best-ranked waiting job, if any.
    fn dispatch_next(&mut self, core: CoreId, time: Time) -> Option<JobId> {
        match self.jobs.iter().position(|job| !job.is_running()) {
            Some(index) => self.dispatch(index, core, time),
            None => {
                debug!(core, time, "Core idle");
                None
            }
        }
    }
}
