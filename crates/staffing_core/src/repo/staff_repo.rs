//! Entity store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over ordered worker and job collections.
//! - Maintain per-job salary aggregates in O(1) per worker mutation.
//!
//! # Invariants
//! - Ids come from monotonically increasing counters and are never reused.
//! - Every path that changes a worker's job, salary or existence goes through
//!   `detach`/`attach`, so `salary_sum`/`worker_count` always match the
//!   workers currently assigned to each job.
//! - Removing a job does not touch its workers; their `job_id` dangles and
//!   resolves to `None`.

use crate::model::job::{Job, JobId, JobSummary, JobTally};
use crate::model::worker::{Worker, WorkerId};
use crate::repo::seed::{SEED_JOBS, SEED_WORKERS};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    WorkerNotFound(WorkerId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkerNotFound(id) => write!(f, "worker not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for worker/job CRUD operations.
pub trait StaffRepository {
    fn reset(&mut self);
    fn find_worker(&self, id: WorkerId) -> Option<&Worker>;
    fn find_job(&self, id: JobId) -> Option<&Job>;
    fn workers(&self) -> &[Worker];
    fn jobs(&self) -> &[Job];
    fn add_worker(&mut self, name: &str, job_id: Option<JobId>, salary: f64) -> Worker;
    fn update_worker(&mut self, updated: &Worker) -> Worker;
    fn replace_worker(&mut self, updated: &Worker) -> RepoResult<Worker>;
    fn remove_worker(&mut self, id: WorkerId) -> Option<Worker>;
    fn add_job(&mut self, name: &str) -> Job;
    fn update_job(&mut self, updated: &Job) -> Job;
    fn remove_job(&mut self, id: JobId) -> Option<Job>;
    fn next_worker_id(&self) -> WorkerId;
    fn next_job_id(&self) -> JobId;

    /// Resolves the worker's job reference; a dangling id reads as `None`.
    fn job_of(&self, worker: &Worker) -> Option<&Job> {
        worker.job_id.and_then(|id| self.find_job(id))
    }

    /// Average salary of a job; `None` if the job is missing or empty.
    fn average_salary(&self, job_id: JobId) -> Option<f64> {
        self.find_job(job_id).and_then(Job::average_salary)
    }

    /// Per-job statistics in job creation order.
    fn job_summaries(&self) -> Vec<JobSummary> {
        self.jobs().iter().map(Job::summary).collect()
    }

    /// Recomputes a job's aggregate by scanning all workers.
    fn tally_job(&self, job_id: JobId) -> JobTally {
        self.workers()
            .iter()
            .filter(|worker| worker.is_assigned_to(job_id))
            .fold(JobTally::default(), |mut tally, worker| {
                tally.salary_sum += worker.salary;
                tally.worker_count += 1;
                tally
            })
    }
}

/// Process-lifetime store holding workers and jobs in creation order.
#[derive(Debug, Clone)]
pub struct InMemoryStaffRepository {
    workers: Vec<Worker>,
    jobs: Vec<Job>,
    next_worker_id: WorkerId,
    next_job_id: JobId,
}

impl Default for InMemoryStaffRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStaffRepository {
    /// Creates a store loaded with the seed dataset.
    pub fn new() -> Self {
        let mut repo = Self::empty();
        repo.reset();
        repo
    }

    /// Creates a store with no records and both counters at zero.
    pub fn empty() -> Self {
        Self {
            workers: Vec::new(),
            jobs: Vec::new(),
            next_worker_id: 0,
            next_job_id: 0,
        }
    }

    fn worker_index(&self, id: WorkerId) -> Option<usize> {
        self.workers.iter().position(|worker| worker.id == id)
    }

    fn job_mut(&mut self, id: JobId) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|job| job.id == id)
    }

    /// Keeps a job reference only when it resolves.
    fn resolve_job_id(&self, job_id: Option<JobId>) -> Option<JobId> {
        let id = job_id?;
        if self.find_job(id).is_some() {
            return Some(id);
        }
        warn!("event=job_resolve module=store status=missing job_id={id}");
        None
    }

    fn attach(&mut self, job_id: Option<JobId>, salary: f64) {
        if let Some(job) = job_id.and_then(|id| self.job_mut(id)) {
            job.add_worker(salary);
        }
    }

    fn detach(&mut self, job_id: Option<JobId>, salary: f64) {
        let Some(id) = job_id else {
            return;
        };
        match self.job_mut(id) {
            Some(job) => job.remove_worker(salary),
            None => debug!("event=job_detach module=store status=dangling job_id={id}"),
        }
    }

    /// Moves a worker's salary contribution from its current job to
    /// `job_id`, then overwrites its fields.
    fn reassign(
        &mut self,
        index: usize,
        name: &str,
        job_id: Option<JobId>,
        salary: f64,
    ) -> Worker {
        let job_id = self.resolve_job_id(job_id);
        let (old_job, old_salary) = {
            let current = &self.workers[index];
            (current.job_id, current.salary)
        };
        self.detach(old_job, old_salary);
        self.attach(job_id, salary);

        let worker = &mut self.workers[index];
        worker.name = name.to_string();
        worker.job_id = job_id;
        worker.salary = salary;
        debug!(
            "event=worker_reassign module=store status=ok worker_id={} from_job={:?} to_job={:?}",
            worker.id, old_job, job_id
        );
        worker.clone()
    }
}

impl StaffRepository for InMemoryStaffRepository {
    fn reset(&mut self) {
        self.workers.clear();
        self.jobs.clear();
        self.next_worker_id = 0;
        self.next_job_id = 0;

        let job_ids: Vec<JobId> = SEED_JOBS.iter().map(|name| self.add_job(name).id).collect();
        for (name, job_index, salary) in SEED_WORKERS {
            self.add_worker(name, job_ids.get(*job_index).copied(), *salary);
        }
        debug!(
            "event=store_reset module=store status=ok jobs={} workers={}",
            self.jobs.len(),
            self.workers.len()
        );
    }

    fn find_worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|worker| worker.id == id)
    }

    fn find_job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    fn workers(&self) -> &[Worker] {
        &self.workers
    }

    fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    fn add_worker(&mut self, name: &str, job_id: Option<JobId>, salary: f64) -> Worker {
        let job_id = self.resolve_job_id(job_id);
        let worker = Worker::new(self.next_worker_id, name, job_id, salary);
        self.next_worker_id += 1;
        self.attach(job_id, salary);
        self.workers.push(worker.clone());
        debug!(
            "event=worker_add module=store status=ok worker_id={} job_id={:?}",
            worker.id, worker.job_id
        );
        worker
    }

    fn update_worker(&mut self, updated: &Worker) -> Worker {
        match self.worker_index(updated.id) {
            Some(index) => self.reassign(index, &updated.name, updated.job_id, updated.salary),
            None => {
                debug!(
                    "event=worker_update module=store status=upsert requested_id={}",
                    updated.id
                );
                self.add_worker(&updated.name, updated.job_id, updated.salary)
            }
        }
    }

    fn replace_worker(&mut self, updated: &Worker) -> RepoResult<Worker> {
        let index = self
            .worker_index(updated.id)
            .ok_or(RepoError::WorkerNotFound(updated.id))?;
        Ok(self.reassign(index, &updated.name, updated.job_id, updated.salary))
    }

    fn remove_worker(&mut self, id: WorkerId) -> Option<Worker> {
        let index = self.worker_index(id)?;
        let removed = self.workers.remove(index);
        self.detach(removed.job_id, removed.salary);
        debug!("event=worker_remove module=store status=ok worker_id={id}");
        Some(removed)
    }

    fn add_job(&mut self, name: &str) -> Job {
        let job = Job::new(self.next_job_id, name);
        self.next_job_id += 1;
        self.jobs.push(job.clone());
        debug!("event=job_add module=store status=ok job_id={}", job.id);
        job
    }

    fn update_job(&mut self, updated: &Job) -> Job {
        match self.job_mut(updated.id) {
            Some(job) => {
                job.name = updated.name.clone();
                job.clone()
            }
            None => {
                debug!(
                    "event=job_update module=store status=upsert requested_id={}",
                    updated.id
                );
                self.add_job(&updated.name)
            }
        }
    }

    fn remove_job(&mut self, id: JobId) -> Option<Job> {
        let index = self.jobs.iter().position(|job| job.id == id)?;
        let removed = self.jobs.remove(index);
        if removed.worker_count > 0 {
            warn!(
                "event=job_remove module=store status=orphaned job_id={id} workers={}",
                removed.worker_count
            );
        } else {
            debug!("event=job_remove module=store status=ok job_id={id}");
        }
        Some(removed)
    }

    fn next_worker_id(&self) -> WorkerId {
        self.next_worker_id
    }

    fn next_job_id(&self) -> JobId {
        self.next_job_id
    }
}
