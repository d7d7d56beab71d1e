use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::auth_dto::{LoginPayload, RegisterPayload, SessionResponse},
    error::Result,
    models::user::User,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in", body = User),
        (status = 400, description = "Email or password missing"),
        (status = 401, description = "Invalid email or password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.login(payload).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Registered and logged in", body = User),
        (status = 400, description = "Form validation failed")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session cleared")
    )
)]
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.auth_service.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Active session, if any", body = SessionResponse)
    )
)]
#[axum::debug_handler]
pub async fn session(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let user = state.auth_service.current_user().await;
    Ok(Json(SessionResponse::from(user)))
}
