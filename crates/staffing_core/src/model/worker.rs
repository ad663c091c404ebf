//! Worker domain model.
//!
//! # Responsibility
//! - Define the person record with an optional job assignment.
//!
//! # Invariants
//! - `id` is assigned by the store and immutable afterwards.
//! - `job_id` may dangle after its job is removed; readers must resolve it
//!   through the store and treat a miss as "no job".

use crate::model::job::JobId;
use serde::{Deserialize, Serialize};

/// Store-assigned worker identifier.
pub type WorkerId = u64;

/// Person entity with a salary and an optional job assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    /// `None` means no job assigned.
    pub job_id: Option<JobId>,
    pub salary: f64,
}

impl Worker {
    /// Builds a worker record, typically as the payload for
    /// `update_worker`/`replace_worker`.
    ///
    /// The store decides whether `id` is honoured: upsert paths discard it
    /// when no worker with that id exists.
    pub fn new(
        id: WorkerId,
        name: impl Into<String>,
        job_id: Option<JobId>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            job_id,
            salary,
        }
    }

    /// Returns whether this worker is assigned to `job_id`.
    pub fn is_assigned_to(&self, job_id: JobId) -> bool {
        self.job_id == Some(job_id)
    }
}
