//! Building blocks for a newsletter body.
//!
//! Every function returns a self-contained fragment (a wrapping table headed
//! by a comment) that can be concatenated straight into document content.
//! Free text is HTML-escaped and links are restricted to safe schemes before
//! interpolation.

use crate::domain::ButtonColor;
use serde::Deserialize;

pub fn text_component(text: &str) -> String {
    format!(
        r#"<!-- Text Component -->
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="margin: 16px 0;">
<tr>
<td style="padding: 16px 20px; background-color: #f8f9fa; border-left: 4px solid #007bff; font-size: 16px; line-height: 1.6; color: #333333;">
{}
</td>
</tr>
</table>
"#,
        escape_text(text)
    )
}

pub fn heading_component(heading: &str) -> String {
    format!(
        r#"<!-- Heading Component -->
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="margin: 24px 0 8px;">
<tr>
<td>
<h2 style="margin: 0; font-size: 24px; line-height: 1.3; color: #222222;">{}</h2>
</td>
</tr>
</table>
"#,
        escape_text(heading)
    )
}

pub fn image_component(url: &str) -> String {
    format!(
        r#"<!-- Image Component -->
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="margin: 16px 0;">
<tr>
<td align="center">
<img src="{}" alt="Newsletter image" width="560" style="display: block; max-width: 100%; height: auto; border: 0;">
</td>
</tr>
</table>
"#,
        safe_url(url)
    )
}

pub fn button_component(text: &str, url: &str, color: ButtonColor) -> String {
    let url = safe_url(url);
    let text = escape_text(text);
    let background = color.background();
    let foreground = color.text();
    format!(
        r#"<!-- Button Component -->
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="margin: 24px 0;">
<tr>
<td align="center">
<!--[if mso]>
<v:roundrect xmlns:v="urn:schemas-microsoft-com:vml" href="{url}" style="height: 44px; v-text-anchor: middle; width: 220px;" arcsize="10%" stroke="f" fillcolor="{background}">
<center style="color: {foreground}; font-family: Arial, sans-serif; font-size: 16px; font-weight: bold;">{text}</center>
</v:roundrect>
<![endif]-->
<!--[if !mso]><!-->
<a href="{url}" target="_blank" style="display: inline-block; padding: 14px 28px; background-color: {background}; color: {foreground}; font-size: 16px; font-weight: bold; text-decoration: none; border-radius: 4px;">{text}</a>
<!--<![endif]-->
</td>
</tr>
</table>
"#
    )
}

/// Button whose colour is given as a stored inline style string.
pub fn button_component_from_style(text: &str, url: &str, color_style: &str) -> String {
    button_component(text, url, ButtonColor::from_legacy_style(color_style))
}

pub fn divider_component() -> String {
    r#"<!-- Divider Component -->
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="margin: 24px 0;">
<tr>
<td style="height: 2px; line-height: 2px; font-size: 2px; background-color: #007bff; background-image: linear-gradient(to right, #007bff, #28a745);">&nbsp;</td>
</tr>
</table>
"#
    .to_string()
}

/// A component request as it arrives over the wire.
#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    Text {
        text: String,
    },
    Heading {
        heading: String,
    },
    Image {
        url: String,
    },
    Button {
        text: String,
        url: String,
        #[serde(default)]
        color: String,
    },
    Divider,
}

impl Component {
    pub fn render(&self) -> String {
        match self {
            Component::Text { text } => text_component(text),
            Component::Heading { heading } => heading_component(heading),
            Component::Image { url } => image_component(url),
            Component::Button { text, url, color } => {
                button_component(text, url, ButtonColor::from_name(color))
            }
            Component::Divider => divider_component(),
        }
    }
}

fn escape_text(s: &str) -> String {
    htmlescape::encode_minimal(s)
}

// Only http(s), mailto and relative links survive; anything else (javascript:,
// data:, ...) is replaced with an inert anchor.
fn safe_url(url: &str) -> String {
    let trimmed = url.trim();
    let scheme = trimmed
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase())
        .filter(|scheme| !scheme.contains(['/', '?', '#']));
    match scheme.as_deref() {
        None | Some("http") | Some("https") | Some("mailto") => htmlescape::encode_minimal(trimmed),
        Some(_) => "#".to_string(),
    }
}
