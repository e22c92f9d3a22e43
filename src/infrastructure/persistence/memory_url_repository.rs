//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{DomainMetric, NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local repository backed by a vector of records.
///
/// Mirrors the PostgreSQL schema: ids are assigned sequentially from 1 and an
/// insert with an already used short code is rejected like the unique index
/// would reject it. Used by the HTTP tests in place of PostgreSQL.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: RwLock<Vec<UrlRecord>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all stored records in insertion order.
    pub async fn records(&self) -> Vec<UrlRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;

        if records
            .iter()
            .any(|r| r.short_code == new_record.short_code)
        {
            return Err(AppError::internal("Unique constraint violation"));
        }

        let record = UrlRecord::new(
            records.len() as i64 + 1,
            new_record.original_url,
            new_record.short_code,
            new_record.domain,
            Utc::now(),
            0,
        );
        records.push(record.clone());

        Ok(record)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;

        Ok(records.iter().find(|r| r.short_code == short_code).cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;

        Ok(records
            .iter()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn increment_access_count(&self, id: i64) -> Result<(), AppError> {
        let mut records = self.records.write().await;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("URL record {} not found", id)))?;
        record.access_count += 1;

        Ok(())
    }

    async fn get_top_domains(&self, limit: i64) -> Result<Vec<DomainMetric>, AppError> {
        let records = self.records.read().await;

        let mut counts: HashMap<&str, i64> = HashMap::new();
        for record in records.iter() {
            *counts.entry(record.domain.as_str()).or_default() += 1;
        }

        let mut metrics: Vec<DomainMetric> = counts
            .into_iter()
            .map(|(domain, count)| DomainMetric::new(domain, count))
            .collect();
        metrics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
        metrics.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(metrics)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
