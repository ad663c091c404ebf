//! Job category model and its salary aggregate.
//!
//! # Responsibility
//! - Define the job record and its running salary statistics.
//! - Provide O(1) add/remove primitives for the aggregate.
//!
//! # Invariants
//! - `salary_sum`/`worker_count` equal the sum/count over workers whose
//!   `job_id` is this job's id.
//! - Only the entity store calls the aggregate primitives.

use log::warn;
use serde::{Deserialize, Serialize};

/// Store-assigned job identifier.
pub type JobId = u64;

/// Relative tolerance when comparing running and recomputed salary sums.
const SALARY_SUM_TOLERANCE: f64 = 1e-9;

/// Job category aggregating salary statistics over its workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub salary_sum: f64,
    pub worker_count: u32,
}

impl Job {
    /// Creates a job with an empty aggregate.
    pub fn new(id: JobId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            salary_sum: 0.0,
            worker_count: 0,
        }
    }

    /// Average salary of assigned workers.
    ///
    /// Returns `None` when no worker is assigned instead of dividing by zero.
    pub fn average_salary(&self) -> Option<f64> {
        if self.worker_count == 0 {
            return None;
        }
        Some(self.salary_sum / f64::from(self.worker_count))
    }

    pub(crate) fn add_worker(&mut self, salary: f64) {
        self.salary_sum += salary;
        self.worker_count += 1;
    }

    pub(crate) fn remove_worker(&mut self, salary: f64) {
        if self.worker_count == 0 {
            warn!(
                "event=job_aggregate module=model status=underflow job_id={}",
                self.id
            );
            return;
        }
        self.worker_count -= 1;
        if self.worker_count == 0 {
            // Clears rounding residue left by repeated += / -=.
            self.salary_sum = 0.0;
        } else {
            self.salary_sum -= salary;
        }
    }

    /// Read-only view including the derived average.
    pub fn summary(&self) -> JobSummary {
        JobSummary {
            id: self.id,
            name: self.name.clone(),
            worker_count: self.worker_count,
            salary_sum: self.salary_sum,
            average_salary: self.average_salary(),
        }
    }
}

/// Serializable per-job statistics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub id: JobId,
    pub name: String,
    pub worker_count: u32,
    pub salary_sum: f64,
    /// `null` when the job has no workers.
    pub average_salary: Option<f64>,
}

/// Aggregate recomputed from scratch by scanning workers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JobTally {
    pub salary_sum: f64,
    pub worker_count: u32,
}

impl JobTally {
    /// Returns whether the running aggregate on `job` matches this tally.
    ///
    /// Counts must be equal; sums are compared with a relative tolerance
    /// since the running sum accumulates rounding from `+=`/`-=`.
    pub fn matches(&self, job: &Job) -> bool {
        let scale = self.salary_sum.abs().max(job.salary_sum.abs()).max(1.0);
        self.worker_count == job.worker_count
            && (self.salary_sum - job.salary_sum).abs() <= SALARY_SUM_TOLERANCE * scale
    }
}

#[cfg(test)]
mod tests {
    use super::{Job, JobTally};

    #[test]
    fn average_is_none_without_workers() {
        let job = Job::new(7, "Idle");
        assert_eq!(job.average_salary(), None);
    }

    #[test]
    fn add_and_remove_keep_sum_and_count_paired() {
        let mut job = Job::new(0, "Engineer");
        job.add_worker(40_000.0);
        job.add_worker(39_000.0);
        assert_eq!(job.worker_count, 2);
        assert_eq!(job.average_salary(), Some(39_500.0));

        job.remove_worker(40_000.0);
        assert_eq!(job.worker_count, 1);
        assert_eq!(job.salary_sum, 39_000.0);
    }

    #[test]
    fn removing_last_worker_clears_rounding_residue() {
        let mut job = Job::new(1, "Analyst");
        job.add_worker(0.1);
        job.add_worker(0.2);
        job.remove_worker(0.1);
        job.remove_worker(0.2);
        assert_eq!(job.worker_count, 0);
        assert_eq!(job.salary_sum, 0.0);
    }

    #[test]
    fn removing_from_empty_job_is_rejected() {
        let mut job = Job::new(2, "Vacant");
        job.remove_worker(500.0);
        assert_eq!(job.worker_count, 0);
        assert_eq!(job.salary_sum, 0.0);
    }

    #[test]
    fn tally_tolerates_rounding_but_not_real_drift() {
        let mut job = Job::new(3, "Analyst");
        job.add_worker(0.1);
        job.add_worker(0.2);
        job.remove_worker(0.1);

        let exact = JobTally {
            salary_sum: 0.2,
            worker_count: 1,
        };
        assert!(exact.matches(&job));

        let drifted = JobTally {
            salary_sum: 0.3,
            worker_count: 1,
        };
        assert!(!drifted.matches(&job));
    }
}
