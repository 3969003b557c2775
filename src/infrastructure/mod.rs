//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`database`] - Connection pool setup and schema bootstrap

pub mod database;
pub mod persistence;
