use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{NewsletterName, NewsletterRecord, NewsletterStatus, TemplateType, TypeFilter};
use crate::repository::NewsletterStore;
use crate::routes::error_chain_fmt;

pub const DUPLICATE_PLACEHOLDER_SUBJECT: &str = "Duplicated newsletter";

#[derive(thiserror::Error)]
pub enum NewsletterServiceError {
    #[error("Failed to read newsletters")]
    Read(#[source] anyhow::Error),
    #[error("Failed to write newsletter")]
    Write(#[source] anyhow::Error),
    #[error("newsletter {0} not found")]
    NotFound(i64),
}

impl std::fmt::Debug for NewsletterServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Chosen once, when the service is built.
pub enum ServiceMode<S> {
    Connected(S),
    /// No backing store: fixed sample records, writes are not kept.
    Standalone(Vec<NewsletterRecord>),
}

pub struct NewsletterService<S> {
    mode: ServiceMode<S>,
}

impl<S: NewsletterStore> NewsletterService<S> {
    pub fn connected(store: S) -> Self {
        Self {
            mode: ServiceMode::Connected(store),
        }
    }

    pub fn standalone() -> Self {
        Self {
            mode: ServiceMode::Standalone(sample_records()),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.mode, ServiceMode::Connected(_))
    }

    #[tracing::instrument(name = "List newsletters", skip(self), fields(connected = self.is_connected()))]
    pub async fn list_all(&self) -> Result<Vec<NewsletterRecord>, NewsletterServiceError> {
        match &self.mode {
            ServiceMode::Connected(store) => {
                store.find_all().await.map_err(NewsletterServiceError::Read)
            }
            ServiceMode::Standalone(samples) => Ok(samples.clone()),
        }
    }

    #[tracing::instrument(name = "Search newsletters", skip(self), fields(connected = self.is_connected()))]
    pub async fn search(
        &self,
        term: &str,
        filter: TypeFilter,
    ) -> Result<Vec<NewsletterRecord>, NewsletterServiceError> {
        let store = match &self.mode {
            ServiceMode::Connected(store) => store,
            // Term and filter are ignored without a store
            ServiceMode::Standalone(samples) => return Ok(samples.clone()),
        };

        let term = term.trim();
        let records = if term.is_empty() {
            store.find_all().await
        } else {
            store.search_by_name(term).await
        }
        .map_err(NewsletterServiceError::Read)?;

        Ok(records
            .into_iter()
            .filter(|r| filter.accepts(r.template_type))
            .collect())
    }

    #[tracing::instrument(
        name = "Save newsletter",
        skip(self, record),
        fields(newsletter_id = record.id, name = %record.name, connected = self.is_connected())
    )]
    pub async fn save(
        &self,
        mut record: NewsletterRecord,
    ) -> Result<NewsletterRecord, NewsletterServiceError> {
        record.active = true;

        match &self.mode {
            ServiceMode::Connected(store) => store
                .save(&record)
                .await
                .map_err(NewsletterServiceError::Write)?
                .ok_or(NewsletterServiceError::NotFound(record.id)),
            ServiceMode::Standalone(samples) => {
                let now = Utc::now();
                if record.is_new() {
                    record.id = time_derived_id(now);
                    record.created_at = Some(now);
                } else if record.created_at.is_none() {
                    // Payloads never carry a creation time; keep the sample's
                    record.created_at = samples
                        .iter()
                        .find(|sample| sample.id == record.id)
                        .and_then(|sample| sample.created_at);
                }
                record.updated_at = Some(now);
                tracing::info!(newsletter_id = record.id, "Standalone save is not persisted");
                Ok(record)
            }
        }
    }

    #[tracing::instrument(name = "Delete newsletter", skip(self), fields(connected = self.is_connected()))]
    pub async fn delete(&self, id: i64) -> Result<bool, NewsletterServiceError> {
        match &self.mode {
            ServiceMode::Connected(store) => {
                store.delete(id).await.map_err(NewsletterServiceError::Write)
            }
            ServiceMode::Standalone(_) => Ok(true),
        }
    }

    /// Standalone mode fabricates a fresh record instead of copying `id`:
    /// subject and content of the original are not carried over.
    #[tracing::instrument(
        name = "Duplicate newsletter",
        skip(self, new_name),
        fields(new_name = %new_name, connected = self.is_connected())
    )]
    pub async fn duplicate(
        &self,
        id: i64,
        new_name: &NewsletterName,
    ) -> Result<NewsletterRecord, NewsletterServiceError> {
        match &self.mode {
            ServiceMode::Connected(store) => store
                .duplicate(id, new_name.as_ref())
                .await
                .map_err(NewsletterServiceError::Write)?
                .ok_or(NewsletterServiceError::NotFound(id)),
            ServiceMode::Standalone(_) => {
                let now = Utc::now();
                Ok(NewsletterRecord {
                    id: time_derived_id(now),
                    name: new_name.as_ref().to_string(),
                    subject: DUPLICATE_PLACEHOLDER_SUBJECT.to_string(),
                    template_type: TemplateType::Newsletter,
                    content: String::new(),
                    active: true,
                    created_at: Some(now),
                    updated_at: Some(now),
                })
            }
        }
    }

    pub fn status_of(&self, record: &NewsletterRecord) -> NewsletterStatus {
        record.status()
    }

    pub fn available_statuses(&self) -> [NewsletterStatus; 3] {
        NewsletterStatus::AVAILABLE
    }
}

// Millisecond timestamps keep ids unique for a single interactive session.
fn time_derived_id(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis().max(1)
}

fn sample_records() -> Vec<NewsletterRecord> {
    let at = |month, day| Utc.with_ymd_and_hms(2024, month, day, 9, 0, 0).single();
    let sample = |id, name: &str, subject: &str, template_type, created, updated| {
        NewsletterRecord {
            id,
            name: name.to_string(),
            subject: subject.to_string(),
            template_type,
            content: String::new(),
            active: true,
            created_at: created,
            updated_at: updated,
        }
    };

    vec![
        sample(
            1,
            "Welcome Newsletter",
            "Welcome to our community!",
            TemplateType::Draft,
            at(1, 15),
            at(1, 15),
        ),
        sample(
            2,
            "Monthly Product Update",
            "What's new this month",
            TemplateType::Ready,
            at(2, 1),
            at(2, 20),
        ),
        sample(
            3,
            "Spring Promotion",
            "Save 20% this spring",
            TemplateType::Sent,
            at(3, 10),
            at(3, 21),
        ),
    ]
}
