//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::Link`] record and its insert shape
//! - [`errors`] - [`errors::LinkError`], the tagged failure of every link operation
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or on a concrete database.
//! Business rules (validation, code assignment) live in
//! [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;
