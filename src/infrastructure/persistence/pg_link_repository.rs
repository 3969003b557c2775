//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_unique_violation;

/// Row shape of the `links` table as read back by every query.
#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    target_url: String,
    click_count: i32,
    created_at: DateTime<Utc>,
    last_clicked_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.code,
            r.target_url,
            i64::from(r.click_count),
            r.created_at,
            r.last_clicked_at,
        )
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound parameters for every value; no SQL is built from user input.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            RETURNING code, target_url, click_count, created_at, last_clicked_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                LinkError::DuplicateCode(new_link.code.clone())
            } else {
                LinkError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, target_url, click_count, created_at, last_clicked_at
            FROM links
            WHERE code = $1 AND deleted_at IS NULL
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, LinkError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, target_url, click_count, created_at, last_clicked_at
            FROM links
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC, code ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, LinkError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), LinkError> {
        sqlx::query(
            r#"
            UPDATE links
            SET click_count = click_count + 1,
                last_clicked_at = NOW()
            WHERE code = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
