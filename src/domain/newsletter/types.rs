use super::{NewsletterName, NewsletterRecord, NewsletterStatus, NewsletterSubject, TemplateType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow)]
pub struct NewsletterRow {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub template_type: String,
    pub content: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<NewsletterRow> for NewsletterRecord {
    type Error = String;

    fn try_from(row: NewsletterRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            subject: row.subject,
            template_type: TemplateType::parse(&row.template_type)?,
            content: row.content,
            active: row.active,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

#[derive(Serialize)]
pub struct NewsletterResponse {
    #[serde(flatten)]
    pub record: NewsletterRecord,
    pub status: NewsletterStatus,
}

impl From<NewsletterRecord> for NewsletterResponse {
    fn from(record: NewsletterRecord) -> Self {
        let status = record.status();
        Self { record, status }
    }
}

#[derive(Deserialize, Debug)]
pub struct SaveNewsletterPayload {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subject: String,
    pub template_type: String,
    #[serde(default)]
    pub content: String,
}

impl TryFrom<SaveNewsletterPayload> for NewsletterRecord {
    type Error = String;

    fn try_from(payload: SaveNewsletterPayload) -> Result<Self, Self::Error> {
        if payload.id < 0 {
            return Err("Invalid newsletter id: cannot be negative.".to_string());
        }
        let mut record = Self::new(
            NewsletterName::parse(payload.name)?,
            NewsletterSubject::parse(payload.subject)?,
            TemplateType::parse(&payload.template_type)?,
            payload.content,
        );
        record.id = payload.id;
        Ok(record)
    }
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct DuplicatePayload {
    pub name: String,
}
