//! Integration test utilities for the settlement-guidance server
//!
//! Spawns the full HTTP server against real PostgreSQL and Redis instances
//! and exercises it over the wire.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
