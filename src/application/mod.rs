//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point for link operations.
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, deletion and click counting

pub mod services;
