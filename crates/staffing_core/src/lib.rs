//! Core registry logic for workers and job categories.
//! This crate is the single source of truth for the job salary aggregates.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::job::{Job, JobId, JobSummary, JobTally};
pub use model::worker::{Worker, WorkerId};
pub use repo::staff_repo::{InMemoryStaffRepository, RepoError, RepoResult, StaffRepository};
pub use service::registry_service::RegistryService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
