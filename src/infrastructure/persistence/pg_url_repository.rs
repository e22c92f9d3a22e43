//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{DomainMetric, NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    domain: String,
    created_at: DateTime<Utc>,
    access_count: i64,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(
            r.id,
            r.original_url,
            r.short_code,
            r.domain,
            r.created_at,
            r.access_count,
        )
    }
}

#[derive(Debug, FromRow)]
struct DomainCountRow {
    domain: String,
    count: i64,
}

/// PostgreSQL repository for URL records.
///
/// Uses SQLx prepared statements; the `urls` table is created by the
/// migrations in `migrations/`.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code, domain)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_code, domain, created_at, access_count
            "#,
        )
        .bind(&new_record.original_url)
        .bind(&new_record.short_code)
        .bind(&new_record.domain)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, domain, created_at, access_count
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, domain, created_at, access_count
            FROM urls
            WHERE original_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn increment_access_count(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE urls SET access_count = access_count + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("URL record {} not found", id)));
        }

        Ok(())
    }

    async fn get_top_domains(&self, limit: i64) -> Result<Vec<DomainMetric>, AppError> {
        let rows = sqlx::query_as::<_, DomainCountRow>(
            r#"
            SELECT domain, COUNT(*) AS count
            FROM urls
            GROUP BY domain
            ORDER BY count DESC, domain ASC
            LIMIT $1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DomainMetric::new(r.domain, r.count))
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
