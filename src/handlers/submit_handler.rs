use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::SubmitRequest};

/// Scores a quiz submission. Every failure is logged here and returned as
/// `{ ok: false, error }`. Rejected input is only a warning.
#[post("/api/submit")]
pub async fn submit(
    state: web::Data<AppState>,
    request: web::Json<SubmitRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .submission_service
        .submit(request.into_inner())
        .await
        .inspect_err(|err| log::log!(failure_level(err), "API error: {}", err))?;

    Ok(HttpResponse::Ok().json(response))
}

fn failure_level(err: &AppError) -> log::Level {
    match err {
        AppError::ValidationError(_) => log::Level::Warn,
        _ => log::Level::Error,
    }
}

/// Body parse failures surface like any other unexpected error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::error!("API error: {}", err);
        AppError::InternalError(err.to_string()).into()
    })
}
