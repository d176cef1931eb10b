use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

pub fn build_error_response(status_code: StatusCode, message: String) -> HttpResponse {
    let error_response = ErrorResponse {
        code: status_code.as_u16(),
        message,
    };
    HttpResponse::build(status_code).json(error_response)
}

/// Rejected JSON bodies get the same `{code, message}` shape as handler errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    tracing::warn!(error = %message, "Rejected JSON payload");
    InternalError::from_response(err, build_error_response(StatusCode::BAD_REQUEST, message))
        .into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    tracing::warn!(error = %message, "Rejected query string");
    InternalError::from_response(err, build_error_response(StatusCode::BAD_REQUEST, message))
        .into()
}

/// Writes the error followed by its `source()` chain, one cause per line.
pub fn error_chain_fmt(
    e: &(dyn std::error::Error),
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}")?;

    let mut current = e.source();
    while let Some(cause) = current {
        // `{:#?}` asks for Debug causes, plain `{:?}` gets Display
        if f.alternate() {
            writeln!(f, "Caused by:\n\t{cause:?}")?;
        } else {
            writeln!(f, "Caused by:\n\t{cause}")?;
        }
        current = cause.source();
    }
    Ok(())
}
