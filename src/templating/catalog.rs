use std::collections::BTreeMap;

/// Starter content offered when a newsletter is created from a named template.
///
/// Built once at start-up and shared read-only (it is registered as
/// application data), so concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<&'static str, &'static str>,
}

impl TemplateCatalog {
    pub const DEFAULT_FRAGMENT: &'static str =
        "<p>Start writing your newsletter content here...</p>";

    pub fn new() -> Self {
        let templates = BTreeMap::from([
            ("Welcome", WELCOME),
            ("Monthly Update", MONTHLY_UPDATE),
            ("Product Launch", PRODUCT_LAUNCH),
            ("Event Invitation", EVENT_INVITATION),
            ("Holiday Promotion", HOLIDAY_PROMOTION),
        ]);
        Self { templates }
    }

    /// Falls back to [`Self::DEFAULT_FRAGMENT`] for unknown names.
    pub fn get(&self, name: &str) -> &'static str {
        self.templates
            .get(name)
            .copied()
            .unwrap_or(Self::DEFAULT_FRAGMENT)
    }

    pub fn list(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

const WELCOME: &str = r#"<h2 style="margin: 0 0 12px; color: #222222;">Welcome aboard!</h2>
<p>Thank you for joining our community. Each issue brings you the latest news, tips and offers straight to your inbox.</p>
<p>We are glad to have you with us.</p>"#;

const MONTHLY_UPDATE: &str = r#"<h2 style="margin: 0 0 12px; color: #222222;">This Month at a Glance</h2>
<ul>
<li>Highlight one</li>
<li>Highlight two</li>
<li>Highlight three</li>
</ul>
<p>Read on for the full story behind each update.</p>"#;

const PRODUCT_LAUNCH: &str = r#"<h2 style="margin: 0 0 12px; color: #222222;">Introducing Our Newest Product</h2>
<p>We have been working hard on something special and it is finally here.</p>
<p><strong>Key features:</strong> describe what makes it stand out.</p>"#;

const EVENT_INVITATION: &str = r#"<h2 style="margin: 0 0 12px; color: #222222;">You're Invited!</h2>
<p><strong>Date:</strong> [Event date]<br><strong>Location:</strong> [Venue]</p>
<p>Join us for an afternoon of talks, demos and networking.</p>"#;

const HOLIDAY_PROMOTION: &str = r#"<h2 style="margin: 0 0 12px; color: #222222;">Holiday Savings Are Here</h2>
<p>Celebrate the season with exclusive discounts for our subscribers.</p>
<p style="font-size: 20px; font-weight: bold;">Save up to 30% this week only.</p>"#;
