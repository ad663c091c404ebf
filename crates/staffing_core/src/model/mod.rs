//! Staffing domain model.
//!
//! # Responsibility
//! - Define the worker and job records owned by the entity store.
//! - Keep the job aggregate primitives next to the fields they mutate.
//!
//! # Invariants
//! - Ids are assigned by the store and never reused.
//! - A worker references its job by id only; the job record is resolved
//!   through the store at read time.

pub mod job;
pub mod worker;
