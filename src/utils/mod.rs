//! Utility functions for code generation, validation, and URL processing.
//!
//! - [`code_generator`] - Random short code generation
//! - [`validation`] - Short code format check and form hints
//! - [`url_normalizer`] - Target URL normalization
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
pub mod validation;
