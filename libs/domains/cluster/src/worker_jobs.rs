use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::Job;

/// Tick period driving both the Worker's progress simulator and the
/// Repository's sweep loop.
pub const TICK_SECS: f32 = 1.0;

/// Notional CPU budget, in MHz, shared across all of a Worker's active jobs.
pub const TOTAL_BUDGET_MHZ: f32 = 4800.0;

/// Baseline time for one job to complete with the full budget to itself.
pub const IDEAL_TIME_SECS: f32 = 4.0;

/// MHz required to advance a job's `percent_complete` by one point per tick.
pub const MHZ_PER_PERCENT: f32 = 48.0;

/// Period of the Repository's liveness + refresh sweep.
pub const SWEEP_PERIOD_SECS: u64 = 1;

/// A Worker's authoritative mapping from job identifier to [`Job`].
#[derive(Debug, Default)]
pub struct WorkerJobSet {
    jobs: HashMap<Uuid, Job>,
}

impl WorkerJobSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new Job with `percent_complete = 0`, `start_time = now`.
    pub fn new_job(&mut self, now: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.jobs.insert(id, Job::new(id, now));
        id
    }

    /// Number of Jobs whose `percent_complete < 100`.
    pub fn active_count(&self) -> i32 {
        self.jobs.values().filter(|j| !j.is_terminal()).count() as i32
    }

    /// Snapshot copy of every Job in the set, terminal ones included.
    pub fn snapshot(&self) -> Vec<Job> {
        self.jobs.values().cloned().collect()
    }

    /// Advance every active Job by one tick's worth of simulated progress.
    ///
    /// The shared CPU budget is divided evenly across all currently active
    /// jobs, so adding a job slows existing ones proportionally and a job's
    /// finish time is `≈ IDEAL_TIME_SECS · average(active)`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let active = self.jobs.values().filter(|j| !j.is_terminal()).count();
        if active == 0 {
            return;
        }

        let mhz_per_job = TOTAL_BUDGET_MHZ / active as f32;
        let increment = (TICK_SECS / IDEAL_TIME_SECS) * (mhz_per_job / MHZ_PER_PERCENT);

        for job in self.jobs.values_mut() {
            if job.is_terminal() {
                continue;
            }

            job.percent_complete += increment;
            job.duration_seconds = (now - job.start_time)
                .to_std()
                .map(|d| d.as_secs_f32())
                .unwrap_or(0.0);

            if job.percent_complete >= 100.0 {
                job.percent_complete = 100.0;
                job.finish_time = Some(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn solo_job_finishes_in_four_ticks() {
        let mut set = WorkerJobSet::new();
        let start = Utc::now();
        set.new_job(start);

        let mut now = start;
        for _ in 0..3 {
            now += Duration::seconds(1);
            set.tick(now);
        }
        let job = set.snapshot().into_iter().next().unwrap();
        assert!(!job.is_terminal(), "should not finish before 4 ticks");

        now += Duration::seconds(1);
        set.tick(now);
        let job = set.snapshot().into_iter().next().unwrap();
        assert!(job.is_terminal());
        assert_eq!(job.percent_complete, 100.0);
        assert!(job.finish_time.is_some());
    }

    #[test]
    fn two_concurrent_jobs_each_gain_half_rate() {
        let mut set = WorkerJobSet::new();
        let start = Utc::now();
        set.new_job(start);
        set.new_job(start);

        set.tick(start + Duration::seconds(1));

        for job in set.snapshot() {
            assert!((job.percent_complete - 12.5).abs() < 1e-4);
        }
    }

    #[test]
    fn percent_complete_never_decreases() {
        let mut set = WorkerJobSet::new();
        let start = Utc::now();
        set.new_job(start);

        let mut last = 0.0;
        let mut now = start;
        for _ in 0..6 {
            now += Duration::seconds(1);
            set.tick(now);
            let job = set.snapshot().into_iter().next().unwrap();
            assert!(job.percent_complete >= last);
            last = job.percent_complete;
        }
    }

    #[test]
    fn finished_job_is_immutable_on_further_ticks() {
        let mut set = WorkerJobSet::new();
        let start = Utc::now();
        set.new_job(start);

        let mut now = start;
        for _ in 0..4 {
            now += Duration::seconds(1);
            set.tick(now);
        }
        let finished = set.snapshot().into_iter().next().unwrap();
        assert!(finished.is_terminal());

        now += Duration::seconds(10);
        set.tick(now);
        let after = set.snapshot().into_iter().next().unwrap();
        assert_eq!(finished.percent_complete, after.percent_complete);
        assert_eq!(finished.finish_time, after.finish_time);
    }
}
