//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Read paths reject malformed persisted state instead of masking it;
//!   degradation policy is a service-layer decision.

pub mod likes_repo;
