use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::CurrentSession, errors::AppError};

#[get("/api/progress")]
pub async fn get_progress(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let response = state
        .progress_service
        .history(&session.context.user.id)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
