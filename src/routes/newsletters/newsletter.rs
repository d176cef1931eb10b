use crate::domain::{
    DuplicatePayload, NewsletterName, NewsletterRecord, NewsletterResponse, SaveNewsletterPayload,
    SearchQuery, TypeFilter,
};
use crate::newsletter_service::NewsletterServiceError;
use crate::startup::AppNewsletterService;
use crate::{build_error_response, error_chain_fmt};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Deserialize;

#[derive(thiserror::Error)]
pub enum NewsletterError {
    #[error("{0}")]
    ValidationError(String),

    #[error("newsletter not found")]
    NotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for NewsletterError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            NewsletterError::ValidationError(_) => StatusCode::BAD_REQUEST,
            NewsletterError::NotFound => StatusCode::NOT_FOUND,
            NewsletterError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        build_error_response(status_code, self.to_string())
    }
}

impl From<NewsletterServiceError> for NewsletterError {
    fn from(e: NewsletterServiceError) -> Self {
        match e {
            NewsletterServiceError::NotFound(_) => NewsletterError::NotFound,
            e => NewsletterError::UnexpectedError(e.into()),
        }
    }
}

fn into_responses(records: Vec<NewsletterRecord>) -> Vec<NewsletterResponse> {
    records.into_iter().map(NewsletterResponse::from).collect()
}

#[tracing::instrument(skip(service))]
pub async fn list_newsletters(
    service: web::Data<AppNewsletterService>,
) -> Result<HttpResponse, NewsletterError> {
    let records = service.list_all().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "newsletters": into_responses(records)
    })))
}

#[tracing::instrument(
    skip(service, query),
    fields(term = %query.term, type_filter = ?query.type_filter)
)]
pub async fn search_newsletters(
    query: web::Query<SearchQuery>,
    service: web::Data<AppNewsletterService>,
) -> Result<HttpResponse, NewsletterError> {
    let query = query.into_inner();
    let filter = TypeFilter::parse(query.type_filter.as_deref());

    let records = service.search(&query.term, filter).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "newsletters": into_responses(records)
    })))
}

#[tracing::instrument(skip_all, fields(newsletter_id = payload.id, name = %payload.name))]
pub async fn save_newsletter(
    payload: web::Json<SaveNewsletterPayload>,
    service: web::Data<AppNewsletterService>,
) -> Result<HttpResponse, NewsletterError> {
    let record =
        NewsletterRecord::try_from(payload.into_inner()).map_err(NewsletterError::ValidationError)?;
    let created = record.is_new();

    let saved = service.save(record).await?;

    let response = if created {
        HttpResponse::Created()
    } else {
        HttpResponse::Ok()
    }
    .json(NewsletterResponse::from(saved));
    Ok(response)
}

#[derive(Deserialize, Debug)]
pub struct NewsletterPathParams {
    pub id: i64,
}

#[tracing::instrument(skip_all, fields(newsletter_id = %path.id))]
pub async fn delete_newsletter(
    path: web::Path<NewsletterPathParams>,
    service: web::Data<AppNewsletterService>,
) -> Result<HttpResponse, NewsletterError> {
    if !service.delete(path.id).await? {
        return Err(NewsletterError::NotFound);
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": true })))
}

#[tracing::instrument(skip_all, fields(newsletter_id = %path.id, new_name = %payload.name))]
pub async fn duplicate_newsletter(
    path: web::Path<NewsletterPathParams>,
    payload: web::Json<DuplicatePayload>,
    service: web::Data<AppNewsletterService>,
) -> Result<HttpResponse, NewsletterError> {
    let new_name = NewsletterName::parse(payload.into_inner().name)
        .map_err(NewsletterError::ValidationError)?;

    let copy = service.duplicate(path.id, &new_name).await?;

    Ok(HttpResponse::Created().json(NewsletterResponse::from(copy)))
}

#[tracing::instrument(skip(service))]
pub async fn get_statuses(service: web::Data<AppNewsletterService>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "statuses": service.available_statuses()
    }))
}

#[tracing::instrument(skip(service))]
pub async fn get_mode(service: web::Data<AppNewsletterService>) -> HttpResponse {
    let connected = service.is_connected();
    HttpResponse::Ok().json(serde_json::json!({
        "connected": connected,
        "mode": if connected { "connected" } else { "standalone" }
    }))
}
