//! Repository layer: the entity store owning all worker and job state.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract.
//! - Keep job aggregates consistent with worker assignments.
//!
//! # Invariants
//! - The store is the only writer of job aggregate fields.
//! - Lookups signal absence with `None`; only `replace_worker` returns
//!   `NotFound` as an error.

pub mod seed;
pub mod staff_repo;
