//! Link lifecycle service: create, look up, list, delete, and count clicks.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{CODE_LENGTH, FALLBACK_CODE_LENGTH, MAX_ATTEMPTS, generate_code};
use crate::utils::url_normalizer::normalize_url;
use crate::utils::validation::is_valid_code;

/// Service for creating and resolving short links.
///
/// Handles URL normalization, code validation and generation, and click
/// counting on top of a [`LinkRepository`].
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `raw_url`.
    ///
    /// The URL is normalized first, then a code is assigned via
    /// [`Self::assign_code`]. No existence check is made for a requested code;
    /// the insert itself reports collisions.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidUrl`] if the URL cannot be normalized
    /// - [`LinkError::InvalidCodeFormat`] if `requested_code` is malformed
    /// - [`LinkError::DuplicateCode`] if the code is already taken, including the
    ///   rare case where the unchecked fallback code collides
    pub async fn create_link(
        &self,
        raw_url: &str,
        requested_code: Option<&str>,
    ) -> Result<Link, LinkError> {
        let target_url = normalize_url(raw_url).map_err(|e| LinkError::InvalidUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        let code = self.assign_code(requested_code).await?;

        let link = self
            .link_repository
            .create(NewLink { code, target_url })
            .await?;

        tracing::info!(code = %link.code, target_url = %link.target_url, "Link created");

        Ok(link)
    }

    /// Picks the code for a new link.
    ///
    /// A non-blank requested code is trimmed, format-checked, and returned
    /// verbatim (case preserved). Otherwise a code is generated with
    /// [`Self::generate_unique_code`].
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidCodeFormat`] for a malformed requested code.
    pub async fn assign_code(&self, requested_code: Option<&str>) -> Result<String, LinkError> {
        match requested_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) if is_valid_code(code) => Ok(code.to_string()),
            Some(code) => Err(LinkError::InvalidCodeFormat(code.to_string())),
            None => self.generate_unique_code().await,
        }
    }

    /// Generates a code not currently used by any visible link.
    ///
    /// Tries [`MAX_ATTEMPTS`] random 6-character codes, checking each against
    /// the repository. If all of them collide, returns a single 8-character
    /// code without checking it, so the loop always terminates.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Unexpected`] if an existence check fails.
    pub async fn generate_unique_code(&self) -> Result<String, LinkError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = generate_code(CODE_LENGTH);

            if self.link_repository.find_by_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            tracing::debug!(attempt, code = %candidate, "Generated code collided");
        }

        let fallback = generate_code(FALLBACK_CODE_LENGTH);
        tracing::warn!(
            attempts = MAX_ATTEMPTS,
            code = %fallback,
            "All short codes collided, using unchecked fallback code"
        );

        Ok(fallback)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no visible link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, LinkError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| LinkError::NotFound(code.to_string()))
    }

    /// Lists every visible link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, LinkError> {
        self.link_repository.list().await
    }

    /// Deletes a link permanently.
    ///
    /// Returns `Ok(false)` when there was nothing to delete. The code can be
    /// reused immediately afterwards.
    pub async fn delete_link(&self, code: &str) -> Result<bool, LinkError> {
        let deleted = self.link_repository.delete(code).await?;

        if deleted {
            tracing::info!(code, "Link deleted");
        }

        Ok(deleted)
    }

    /// Counts one click on `code`. A missing link is silently ignored.
    pub async fn record_click(&self, code: &str) -> Result<(), LinkError> {
        self.link_repository.increment_clicks(code).await
    }

    /// Resolves `code` to its target URL and counts the click.
    ///
    /// The lookup and the increment are separate statements. A failed
    /// increment is logged and does not fail the resolution.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no visible link has this code.
    pub async fn resolve_redirect(&self, code: &str) -> Result<String, LinkError> {
        let link = self.get_link(code).await?;

        if let Err(e) = self.record_click(&link.code).await {
            tracing::warn!(code = %link.code, error = %e, "Failed to record click");
        }

        Ok(link.target_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(code: &str, url: &str) -> Link {
        Link::new(code.to_string(), url.to_string(), 0, Utc::now(), None)
    }

    fn service(mock: MockLinkRepository) -> LinkService {
        LinkService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_create_link_generates_code() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code().times(1).returning(|_| Ok(None));
        mock.expect_create()
            .withf(|new_link| {
                new_link.code.len() == 6 && new_link.target_url == "https://example.com/"
            })
            .times(1)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.target_url)));

        let link = service(mock).create_link("example.com", None).await.unwrap();

        assert_eq!(link.target_url, "https://example.com/");
        assert_eq!(link.code.len(), 6);
        assert_eq!(link.total_clicks, 0);
    }

    #[tokio::test]
    async fn test_create_link_with_custom_code_preserves_case() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code().times(0);
        mock.expect_create()
            .withf(|new_link| new_link.code == "AbC123")
            .times(1)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.target_url)));

        let link = service(mock)
            .create_link("https://example.com", Some("AbC123"))
            .await
            .unwrap();

        assert_eq!(link.code, "AbC123");
    }

    #[tokio::test]
    async fn test_create_link_trims_custom_code() {
        let mut mock = MockLinkRepository::new();

        mock.expect_create()
            .withf(|new_link| new_link.code == "docs2025")
            .times(1)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.target_url)));

        let link = service(mock)
            .create_link("https://example.com", Some("  docs2025 "))
            .await
            .unwrap();

        assert_eq!(link.code, "docs2025");
    }

    #[tokio::test]
    async fn test_create_link_blank_code_generates_one() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code().times(1).returning(|_| Ok(None));
        mock.expect_create()
            .withf(|new_link| new_link.code.len() == 6)
            .times(1)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.target_url)));

        let result = service(mock).create_link("https://example.com", Some("   ")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_invalid_code_format() {
        let mut mock = MockLinkRepository::new();
        mock.expect_create().times(0);

        let result = service(mock)
            .create_link("https://example.com", Some("bad-code"))
            .await;

        assert!(matches!(result, Err(LinkError::InvalidCodeFormat(code)) if code == "bad-code"));
    }

    #[tokio::test]
    async fn test_create_link_invalid_url() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_code().times(0);
        mock.expect_create().times(0);

        let result = service(mock).create_link("   ", None).await;

        assert!(matches!(result, Err(LinkError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_create_link_duplicate_code() {
        let mut mock = MockLinkRepository::new();

        mock.expect_create()
            .times(1)
            .returning(|new_link| Err(LinkError::DuplicateCode(new_link.code)));

        let result = service(mock)
            .create_link("https://example.com", Some("taken1"))
            .await;

        assert!(matches!(result, Err(LinkError::DuplicateCode(code)) if code == "taken1"));
    }

    #[tokio::test]
    async fn test_generate_unique_code_first_attempt() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_code().times(1).returning(|_| Ok(None));

        let code = service(mock).generate_unique_code().await.unwrap();

        assert_eq!(code.len(), CODE_LENGTH);
        assert!(is_valid_code(&code));
    }

    #[tokio::test]
    async fn test_generate_unique_code_retries_after_collision() {
        let mut mock = MockLinkRepository::new();
        let mut calls = 0;

        mock.expect_find_by_code().times(3).returning(move |code| {
            calls += 1;
            if calls < 3 {
                Ok(Some(create_test_link(code, "https://taken.example/")))
            } else {
                Ok(None)
            }
        });

        let code = service(mock).generate_unique_code().await.unwrap();

        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[tokio::test]
    async fn test_generate_unique_code_falls_back_after_exhaustion() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code()
            .times(MAX_ATTEMPTS)
            .returning(|code| Ok(Some(create_test_link(code, "https://taken.example/"))));

        let code = service(mock).generate_unique_code().await.unwrap();

        assert_eq!(code.len(), FALLBACK_CODE_LENGTH);
        assert!(is_valid_code(&code));
    }

    #[tokio::test]
    async fn test_generate_unique_code_propagates_storage_error() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code()
            .times(1)
            .returning(|_| Err(LinkError::Unexpected("connection reset".to_string())));

        let result = service(mock).generate_unique_code().await;

        assert!(matches!(result, Err(LinkError::Unexpected(_))));
    }

    #[tokio::test]
    async fn test_get_link_not_found() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_code().times(1).returning(|_| Ok(None));

        let result = service(mock).get_link("nope12").await;

        assert!(matches!(result, Err(LinkError::NotFound(code)) if code == "nope12"));
    }

    #[tokio::test]
    async fn test_delete_link_reports_missing_row() {
        let mut mock = MockLinkRepository::new();
        mock.expect_delete()
            .withf(|code| code == "gone12")
            .times(1)
            .returning(|_| Ok(false));

        let deleted = service(mock).delete_link("gone12").await.unwrap();

        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_resolve_redirect_counts_click() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(create_test_link(code, "https://example.com/target"))));
        mock.expect_increment_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(()));

        let target = service(mock).resolve_redirect("abc123").await.unwrap();

        assert_eq!(target, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_redirect_ignores_increment_failure() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(create_test_link(code, "https://example.com/"))));
        mock.expect_increment_clicks()
            .times(1)
            .returning(|_| Err(LinkError::Unexpected("deadlock detected".to_string())));

        let target = service(mock).resolve_redirect("abc123").await.unwrap();

        assert_eq!(target, "https://example.com/");
    }

    #[tokio::test]
    async fn test_resolve_redirect_missing_link_does_not_increment() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code().times(1).returning(|_| Ok(None));
        mock.expect_increment_clicks().times(0);

        let result = service(mock).resolve_redirect("absent").await;

        assert!(matches!(result, Err(LinkError::NotFound(_))));
    }
}
