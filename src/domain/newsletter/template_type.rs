use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Classification tag stored on every newsletter record.
///
/// The first five variants are category tags (reusable templates), the last
/// three are workflow tags (an issue moving towards being sent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateType {
    Newsletter,
    Marketing,
    Announcement,
    Update,
    Promotion,
    Draft,
    Ready,
    Sent,
}

impl TemplateType {
    pub const CATEGORIES: [TemplateType; 5] = [
        TemplateType::Newsletter,
        TemplateType::Marketing,
        TemplateType::Announcement,
        TemplateType::Update,
        TemplateType::Promotion,
    ];

    pub const STATUSES: [TemplateType; 3] =
        [TemplateType::Draft, TemplateType::Ready, TemplateType::Sent];

    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        Self::CATEGORIES
            .iter()
            .chain(Self::STATUSES.iter())
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| format!("Invalid template type: '{trimmed}' is not a recognised tag."))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Newsletter => "NEWSLETTER",
            TemplateType::Marketing => "MARKETING",
            TemplateType::Announcement => "ANNOUNCEMENT",
            TemplateType::Update => "UPDATE",
            TemplateType::Promotion => "PROMOTION",
            TemplateType::Draft => "DRAFT",
            TemplateType::Ready => "READY",
            TemplateType::Sent => "SENT",
        }
    }

    pub fn is_category(&self) -> bool {
        Self::CATEGORIES.contains(self)
    }

    pub fn is_status(&self) -> bool {
        Self::STATUSES.contains(self)
    }
}

impl TryFrom<String> for TemplateType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl Display for TemplateType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post-filter applied to search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Templates,
    Newsletters,
}

impl TypeFilter {
    /// Lookup misses disable filtering instead of failing.
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(str::trim) {
            Some("Templates") => TypeFilter::Templates,
            Some("Newsletters") => TypeFilter::Newsletters,
            _ => TypeFilter::All,
        }
    }

    pub fn accepts(&self, template_type: TemplateType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Templates => template_type.is_category(),
            TypeFilter::Newsletters => template_type.is_status(),
        }
    }
}

/// Display status derived from a record's flag and tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterStatus {
    Inactive,
    Template,
    Draft,
    Ready,
    Sent,
}

impl NewsletterStatus {
    pub const AVAILABLE: [NewsletterStatus; 3] = [
        NewsletterStatus::Draft,
        NewsletterStatus::Ready,
        NewsletterStatus::Sent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsletterStatus::Inactive => "INACTIVE",
            NewsletterStatus::Template => "TEMPLATE",
            NewsletterStatus::Draft => "DRAFT",
            NewsletterStatus::Ready => "READY",
            NewsletterStatus::Sent => "SENT",
        }
    }
}

impl Display for NewsletterStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
