//! Registry use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for request handlers.
//! - Hold one exclusive lock per call so concurrent callers cannot
//!   interleave inside a store operation.
//!
//! # Invariants
//! - Ids are assigned in the order calls acquire the lock.
//! - Returned entities are owned snapshots, never references into the store.

use crate::model::job::{Job, JobId, JobSummary, JobTally};
use crate::model::worker::{Worker, WorkerId};
use crate::repo::staff_repo::{InMemoryStaffRepository, RepoResult, StaffRepository};
use log::warn;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock-guarded wrapper around a staff repository.
pub struct RegistryService<R: StaffRepository> {
    repo: Mutex<R>,
}

impl Default for RegistryService<InMemoryStaffRepository> {
    fn default() -> Self {
        Self::new(InMemoryStaffRepository::new())
    }
}

impl<R: StaffRepository> RegistryService<R> {
    /// Creates a service owning the provided repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo: Mutex::new(repo),
        }
    }

    fn lock(&self) -> MutexGuard<'_, R> {
        self.repo.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("event=registry_lock module=service status=recovered_poison");
            poisoned.into_inner()
        })
    }

    /// Restores the seed dataset.
    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn find_worker(&self, id: WorkerId) -> Option<Worker> {
        self.lock().find_worker(id).cloned()
    }

    pub fn find_job(&self, id: JobId) -> Option<Job> {
        self.lock().find_job(id).cloned()
    }

    /// Snapshot of all workers in creation order.
    pub fn list_workers(&self) -> Vec<Worker> {
        self.lock().workers().to_vec()
    }

    /// Snapshot of all jobs in creation order.
    pub fn list_jobs(&self) -> Vec<Job> {
        self.lock().jobs().to_vec()
    }

    /// Resolves a worker's job; `None` for missing workers, unassigned
    /// workers and dangling job references alike.
    pub fn job_of_worker(&self, id: WorkerId) -> Option<Job> {
        let repo = self.lock();
        let worker = repo.find_worker(id)?;
        repo.job_of(worker).cloned()
    }

    pub fn add_worker(&self, name: &str, job_id: Option<JobId>, salary: f64) -> Worker {
        self.lock().add_worker(name, job_id, salary)
    }

    /// Upserts a worker. See `StaffRepository::update_worker`.
    pub fn update_worker(&self, updated: &Worker) -> Worker {
        self.lock().update_worker(updated)
    }

    /// Overwrites an existing worker or returns `WorkerNotFound`.
    pub fn replace_worker(&self, updated: &Worker) -> RepoResult<Worker> {
        self.lock().replace_worker(updated)
    }

    pub fn remove_worker(&self, id: WorkerId) -> Option<Worker> {
        self.lock().remove_worker(id)
    }

    pub fn add_job(&self, name: &str) -> Job {
        self.lock().add_job(name)
    }

    pub fn update_job(&self, updated: &Job) -> Job {
        self.lock().update_job(updated)
    }

    pub fn remove_job(&self, id: JobId) -> Option<Job> {
        self.lock().remove_job(id)
    }

    pub fn average_salary(&self, job_id: JobId) -> Option<f64> {
        self.lock().average_salary(job_id)
    }

    pub fn job_summaries(&self) -> Vec<JobSummary> {
        self.lock().job_summaries()
    }

    /// Recomputes a job's aggregate from the current workers.
    pub fn tally_job(&self, job_id: JobId) -> JobTally {
        self.lock().tally_job(job_id)
    }

    pub fn next_worker_id(&self) -> WorkerId {
        self.lock().next_worker_id()
    }

    pub fn next_job_id(&self) -> JobId {
        self.lock().next_job_id()
    }

    /// Consumes the service and returns the repository.
    pub fn into_inner(self) -> R {
        self.repo
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
