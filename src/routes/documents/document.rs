use crate::domain::HeaderColor;
use crate::templating::{
    self, Component, DocumentParts, TemplateCatalog, extract_company_name, extract_content,
};
use crate::{build_error_response, error_chain_fmt};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Deserialize;

#[derive(thiserror::Error)]
pub enum DocumentError {
    #[error("{0}")]
    ValidationError(String),
}

impl std::fmt::Debug for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for DocumentError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            DocumentError::ValidationError(_) => StatusCode::BAD_REQUEST,
        };

        build_error_response(status_code, self.to_string())
    }
}

#[tracing::instrument(skip(catalog))]
pub async fn list_templates(catalog: web::Data<TemplateCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "templates": catalog.list() }))
}

#[derive(Deserialize, Debug)]
pub struct TemplatePathParams {
    pub name: String,
}

#[tracing::instrument(skip(catalog))]
pub async fn get_template(
    path: web::Path<TemplatePathParams>,
    catalog: web::Data<TemplateCatalog>,
) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "name": path.name,
        "found": catalog.has(&path.name),
        "html": catalog.get(&path.name),
    }))
}

#[tracing::instrument]
pub async fn build_component(payload: web::Json<Component>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "html": payload.render() }))
}

/// Header colour as sent by clients: a hex string or channel fractions.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum HeaderColorPayload {
    Hex(String),
    Fractions { red: f64, green: f64, blue: f64 },
}

impl TryFrom<HeaderColorPayload> for HeaderColor {
    type Error = String;

    fn try_from(payload: HeaderColorPayload) -> Result<Self, Self::Error> {
        match payload {
            HeaderColorPayload::Hex(hex) => HeaderColor::parse_hex(&hex),
            HeaderColorPayload::Fractions { red, green, blue } => {
                if [red, green, blue].iter().any(|c| !(0.0..=1.0).contains(c)) {
                    return Err(
                        "Invalid header color: channels must be between 0 and 1.".to_string()
                    );
                }
                Ok(HeaderColor::from_fractions(red, green, blue))
            }
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RenderPayload {
    title: Option<String>,
    company: Option<String>,
    content: Option<String>,
    header_color: Option<HeaderColorPayload>,
}

#[tracing::instrument(skip_all, fields(title = ?payload.title))]
pub async fn render_html(
    payload: web::Json<RenderPayload>,
) -> Result<HttpResponse, DocumentError> {
    let payload = payload.into_inner();
    let header_color = payload
        .header_color
        .map(HeaderColor::try_from)
        .transpose()
        .map_err(DocumentError::ValidationError)?;

    let parts = DocumentParts {
        title: payload.title.as_deref(),
        company: payload.company.as_deref(),
        content: payload.content.as_deref(),
        header_color,
    };
    let document = templating::render_document(&parts);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(document))
}

#[derive(Deserialize, Debug)]
pub struct ExtractPayload {
    document: String,
}

#[tracing::instrument(skip_all, fields(document_length = payload.document.len()))]
pub async fn extract_parts(payload: web::Json<ExtractPayload>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "content": extract_content(&payload.document),
        "company_name": extract_company_name(&payload.document),
    }))
}
