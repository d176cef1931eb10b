use unicode_segmentation::UnicodeSegmentation;

/// Email subject line. Empty is allowed while a record is still a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterSubject(String);

impl NewsletterSubject {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.graphemes(true).count() > 300 {
            return Err(
                "Invalid newsletter subject: cannot be longer than 300 characters.".to_string(),
            );
        }

        if trimmed.contains(['\r', '\n']) {
            return Err("Invalid newsletter subject: must be a single line.".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NewsletterSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NewsletterSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
