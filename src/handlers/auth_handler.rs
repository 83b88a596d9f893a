use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::CurrentSession,
    errors::AppError,
    models::dto::{
        request::{SignInRequest, SignUpRequest},
        response::{MessageResponse, SessionResponse},
    },
};

#[post("/api/auth/signup")]
pub async fn sign_up(
    state: web::Data<AppState>,
    request: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    state
        .auth_client
        .sign_up(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new(
        "Account created. Check your email to confirm it.",
    )))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let auth_session = state
        .auth_client
        .sign_in(&request.email, &request.password)
        .await?;

    let email = auth_session.user.email.clone();
    let session_id = state
        .session_store
        .create(auth_session.user, auth_session.access_token);

    log::info!("User {} signed in", email);

    Ok(HttpResponse::Ok().json(SessionResponse {
        session_token: session_id.to_string(),
        email,
    }))
}

#[post("/api/auth/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    // Best effort against the external service; the local session is
    // cleared either way so the user always lands unauthenticated.
    if let Err(e) = state
        .auth_client
        .sign_out(&session.context.access_token)
        .await
    {
        log::warn!("External sign-out failed: {}", e);
    }

    state.session_store.remove(&session.session_id);

    Ok(HttpResponse::Ok().json(MessageResponse::new("Signed out.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::client::MockAuthClient, config::Config,
        repositories::result_repository::MockResultRepository,
        services::gemini_client::MockGenerativeClient,
    };
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::from_parts(
            Config::test_config(),
            Arc::new(MockAuthClient::new()),
            Arc::new(MockGenerativeClient::new()),
            Arc::new(MockResultRepository::new()),
        )
    }

    #[actix_web::test]
    async fn logout_without_session_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(logout),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn login_rejects_malformed_email_before_calling_the_auth_service() {
        // The mock would panic on an unexpected call; validation must
        // reject the request first.
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(login),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({"email": "not-an-email", "password": "secret123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
