//! Core use-case services.
//!
//! # Responsibility
//! - Expose the entity store to request-handling code through `&self`.
//! - Serialize every store call behind one coarse lock.

pub mod registry_service;
