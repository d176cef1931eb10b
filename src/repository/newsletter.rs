use anyhow::Context;
use sqlx::PgPool;

use crate::domain::{NewsletterRecord, NewsletterRow};

/// Persistence collaborator for newsletter records.
///
/// `save` and `duplicate` return `None` when the id they refer to does not exist.
#[allow(async_fn_in_trait)]
pub trait NewsletterStore {
    async fn find_all(&self) -> Result<Vec<NewsletterRecord>, anyhow::Error>;

    async fn search_by_name(&self, term: &str) -> Result<Vec<NewsletterRecord>, anyhow::Error>;

    async fn save(
        &self,
        record: &NewsletterRecord,
    ) -> Result<Option<NewsletterRecord>, anyhow::Error>;

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error>;

    async fn duplicate(
        &self,
        id: i64,
        new_name: &str,
    ) -> Result<Option<NewsletterRecord>, anyhow::Error>;
}

const RETURNING_COLUMNS: &str =
    "id, name, subject, template_type, content, active, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgNewsletterStore {
    pool: PgPool,
}

impl PgNewsletterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NewsletterStore for PgNewsletterStore {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<NewsletterRecord>, anyhow::Error> {
        let rows = sqlx::query_as::<_, NewsletterRow>(&format!(
            r#"
            SELECT {RETURNING_COLUMNS}
            FROM newsletters
            ORDER BY updated_at DESC, id DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to load newsletters")?;

        into_records(rows)
    }

    #[tracing::instrument(skip(self))]
    async fn search_by_name(&self, term: &str) -> Result<Vec<NewsletterRecord>, anyhow::Error> {
        let rows = sqlx::query_as::<_, NewsletterRow>(&format!(
            r#"
            SELECT {RETURNING_COLUMNS}
            FROM newsletters
            WHERE name ILIKE $1
            ORDER BY updated_at DESC, id DESC
            "#
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .context("Failed to search newsletters by name")?;

        into_records(rows)
    }

    #[tracing::instrument(skip(self, record), fields(newsletter_id = record.id))]
    async fn save(
        &self,
        record: &NewsletterRecord,
    ) -> Result<Option<NewsletterRecord>, anyhow::Error> {
        let row = if record.is_new() {
            sqlx::query_as::<_, NewsletterRow>(&format!(
                r#"
                INSERT INTO newsletters (name, subject, template_type, content, active)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING {RETURNING_COLUMNS}
                "#
            ))
            .bind(&record.name)
            .bind(&record.subject)
            .bind(record.template_type.as_str())
            .bind(&record.content)
            .bind(record.active)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to insert newsletter")?
        } else {
            sqlx::query_as::<_, NewsletterRow>(&format!(
                r#"
                UPDATE newsletters
                SET name = $2, subject = $3, template_type = $4, content = $5,
                    active = $6, updated_at = now()
                WHERE id = $1
                RETURNING {RETURNING_COLUMNS}
                "#
            ))
            .bind(record.id)
            .bind(&record.name)
            .bind(&record.subject)
            .bind(record.template_type.as_str())
            .bind(&record.content)
            .bind(record.active)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to update newsletter")?
        };

        row.map(into_record).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM newsletters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to delete newsletter")?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn duplicate(
        &self,
        id: i64,
        new_name: &str,
    ) -> Result<Option<NewsletterRecord>, anyhow::Error> {
        let row = sqlx::query_as::<_, NewsletterRow>(&format!(
            r#"
            INSERT INTO newsletters (name, subject, template_type, content, active)
            SELECT $2, subject, template_type, content, true
            FROM newsletters
            WHERE id = $1
            RETURNING {RETURNING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to duplicate newsletter")?;

        row.map(into_record).transpose()
    }
}

fn into_record(row: NewsletterRow) -> Result<NewsletterRecord, anyhow::Error> {
    let id = row.id;
    NewsletterRecord::try_from(row)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Newsletter {id} has an unrecognised template type"))
}

fn into_records(rows: Vec<NewsletterRow>) -> Result<Vec<NewsletterRecord>, anyhow::Error> {
    rows.into_iter().map(into_record).collect()
}

// Substring match; LIKE wildcards typed by the user are matched literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
