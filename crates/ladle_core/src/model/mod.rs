//! Domain model for recipe search, planning and favorites.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep API-shaped records immutable; derived projections live in the
//!   service layer.
//!
//! # Invariants
//! - Recipe ids are opaque strings owned by the external recipe API.
//! - Shopping-list items carry locally generated stable ids.
//! - No model object is shared by reference across state components.

pub mod likes;
pub mod recipe;
pub mod shopping;
