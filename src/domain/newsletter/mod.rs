mod newsletter_name;
mod newsletter_subject;
mod template_type;
mod types;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use newsletter_name::NewsletterName;
pub use newsletter_subject::NewsletterSubject;
pub use template_type::{NewsletterStatus, TemplateType, TypeFilter};
pub use types::*;

/// A named newsletter (or reusable template) and the HTML document it holds.
///
/// `id == 0` marks a record that has never been saved; the store or the
/// standalone service assigns a non-zero id on first save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsletterRecord {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub template_type: TemplateType,
    pub content: String,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewsletterRecord {
    pub fn new(
        name: NewsletterName,
        subject: NewsletterSubject,
        template_type: TemplateType,
        content: String,
    ) -> Self {
        Self {
            id: 0,
            name: name.into_inner(),
            subject: subject.into_inner(),
            template_type,
            content,
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    pub fn status(&self) -> NewsletterStatus {
        if !self.active {
            return NewsletterStatus::Inactive;
        }
        match self.template_type {
            TemplateType::Newsletter
            | TemplateType::Marketing
            | TemplateType::Announcement
            | TemplateType::Update
            | TemplateType::Promotion => NewsletterStatus::Template,
            TemplateType::Draft => NewsletterStatus::Draft,
            TemplateType::Ready => NewsletterStatus::Ready,
            TemplateType::Sent => NewsletterStatus::Sent,
        }
    }
}
