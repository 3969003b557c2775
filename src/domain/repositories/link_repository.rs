//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::LinkError;
use async_trait::async_trait;

/// Repository interface for the `links` table.
///
/// Reads and click increments only see rows whose `deleted_at` is null.
/// Deletion is a hard delete, so in practice every stored row is visible.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// Uniqueness is enforced by the storage engine at insert time, with no
    /// separate existence check beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::DuplicateCode`] if a row with the same code exists.
    /// Returns [`LinkError::Unexpected`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, LinkError>;

    /// Finds a non-deleted link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Unexpected`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError>;

    /// Lists all non-deleted links, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Unexpected`] on database errors.
    async fn list(&self) -> Result<Vec<Link>, LinkError>;

    /// Removes the row for `code` unconditionally.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Unexpected`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, LinkError>;

    /// Atomically adds one click and stamps `last_clicked_at` with the current time.
    ///
    /// Matching no row is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Unexpected`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), LinkError>;
}
