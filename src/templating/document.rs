use crate::domain::HeaderColor;
use chrono::{Local, NaiveDate};

pub const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
pub const COMPANY_PLACEHOLDER: &str = "{{COMPANY}}";
pub const CONTENT_PLACEHOLDER: &str = "{{CONTENT}}";
pub const DATE_PLACEHOLDER: &str = "{{DATE}}";
pub const HEADER_COLOR_PLACEHOLDER: &str = "{{HEADER_COLOR}}";

pub const DEFAULT_TITLE: &str = "Newsletter";
pub const DEFAULT_COMPANY: &str = "Your Company";

/// Marks the cell that holds the newsletter body.
pub const BODY_MARKER: &str = r#"<td class="body-text">"#;

/// Inputs for one rendered document.
///
/// `None` picks the default; an empty string is kept as given.
#[derive(Debug, Default, Clone)]
pub struct DocumentParts<'a> {
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub content: Option<&'a str>,
    pub header_color: Option<HeaderColor>,
}

/// Renders with today's local date.
pub fn render_document(parts: &DocumentParts<'_>) -> String {
    render_document_on(parts, Local::now().date_naive())
}

#[tracing::instrument(
    name = "Render newsletter document",
    skip(parts),
    fields(title = ?parts.title, content_length = parts.content.map_or(0, str::len))
)]
pub fn render_document_on(parts: &DocumentParts<'_>, date: NaiveDate) -> String {
    let title = htmlescape::encode_minimal(parts.title.unwrap_or(DEFAULT_TITLE));
    let company = htmlescape::encode_minimal(parts.company.unwrap_or(DEFAULT_COMPANY));
    let content = parts.content.unwrap_or_default();
    let date = format_date(date);
    let header_color = parts.header_color.unwrap_or_default().to_hex();

    substitute(DOCUMENT_TEMPLATE, |key| match key {
        "TITLE" => Some(title.as_str()),
        "COMPANY" => Some(company.as_str()),
        "CONTENT" => Some(content),
        "DATE" => Some(date.as_str()),
        "HEADER_COLOR" => Some(header_color.as_str()),
        _ => None,
    })
}

/// "Month DD, YYYY", e.g. "March 05, 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

// Single pass over the template: values are copied as-is, so a placeholder
// token inside user content is never expanded.
fn substitute<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len() + 1024);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let value = after_open
            .find("}}")
            .and_then(|end| lookup(&after_open[..end]).map(|value| (value, end)));
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after_open[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// The one document skeleton every newsletter is poured into.
pub const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en" xmlns="http://www.w3.org/1999/xhtml" xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta http-equiv="X-UA-Compatible" content="IE=edge">
<meta name="x-apple-disable-message-reformatting">
<title>{{TITLE}}</title>
<!--[if mso]>
<noscript>
<xml>
<o:OfficeDocumentSettings>
<o:PixelsPerInch>96</o:PixelsPerInch>
</o:OfficeDocumentSettings>
</xml>
</noscript>
<![endif]-->
<style>
body { margin: 0; padding: 0; width: 100%; background-color: #f4f4f4; font-family: Arial, Helvetica, sans-serif; }
table, td { border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }
img { border: 0; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }
.container { width: 600px; max-width: 600px; background-color: #ffffff; }
.header { padding: 32px 24px; text-align: center; color: #ffffff; }
.header h1 { margin: 0; font-size: 28px; line-height: 1.2; }
.header-meta { margin: 8px 0 0; font-size: 14px; }
.body-text { padding: 24px; font-size: 16px; line-height: 1.6; color: #333333; }
.footer { padding: 16px 24px; font-size: 12px; line-height: 1.5; color: #888888; text-align: center; background-color: #fafafa; }
@media only screen and (max-width: 620px) {
.container { width: 100% !important; }
.body-text { padding: 16px !important; }
}
</style>
</head>
<body>
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="background-color: #f4f4f4;">
<tr>
<td align="center" style="padding: 24px 0;">
<!--[if mso]>
<table role="presentation" width="600" cellpadding="0" cellspacing="0" border="0"><tr><td>
<![endif]-->
<table role="presentation" class="container" width="600" cellpadding="0" cellspacing="0" border="0">
<tr>
<td class="header" style="background-color: {{HEADER_COLOR}};">
<h1>{{TITLE}}</h1>
<p class="header-meta">{{COMPANY}} • {{DATE}}</p>
</td>
</tr>
<tr>
<td class="body-text">{{CONTENT}}</td>
</tr>
<tr>
<td class="footer">
<p style="margin: 0;">You are receiving this email because you subscribed to updates from {{COMPANY}}.</p>
</td>
</tr>
</table>
<!--[if mso]>
</td></tr></table>
<![endif]-->
</td>
</tr>
</table>
</body>
</html>
"#;
