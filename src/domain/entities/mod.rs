//! Core domain entities.
//!
//! The service persists a single entity, [`Link`]. [`NewLink`] carries the
//! already-validated fields needed to insert one.

pub mod link;

pub use link::{Link, NewLink};
