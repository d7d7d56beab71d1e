use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::resume_dto::{CreateResumePayload, ResumeFilterOptions, ResumeListQuery, ResumeListResponse},
    error::Result,
    models::resume::Resume,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/resumes",
    params(
        ("search" = Option<String>, Query, description = "Text matched against name, title, skills and about"),
        ("location" = Option<String>, Query, description = "Exact location"),
        ("experience" = Option<String>, Query, description = "noExperience, between1And3, between3And6 or moreThan6"),
        ("sort" = Option<String>, Query, description = "newest or oldest")
    ),
    responses(
        (status = 200, description = "Matching resumes", body = ResumeListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_resumes(
    State(state): State<AppState>,
    Query(query): Query<ResumeListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.data_service.list_resumes(&query).await;
    Ok(Json(ResumeListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/resumes/filters",
    responses(
        (status = 200, description = "Values offered by the resume filters", body = ResumeFilterOptions)
    )
)]
#[axum::debug_handler]
pub async fn resume_filter_options(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.data_service.resume_filter_options().await))
}

#[utoipa::path(
    get,
    path = "/api/resumes/{id}",
    params(
        ("id" = i64, Path, description = "Resume ID")
    ),
    responses(
        (status = 200, description = "Resume found", body = Resume),
        (status = 404, description = "Resume not found")
    )
)]
#[axum::debug_handler]
pub async fn get_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let resume = state.data_service.get_resume(id).await?;
    Ok(Json(resume))
}

#[utoipa::path(
    post,
    path = "/api/resumes",
    request_body = CreateResumePayload,
    responses(
        (status = 201, description = "Resume created successfully", body = Resume),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_resume(
    State(state): State<AppState>,
    Json(payload): Json<CreateResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let resume = state.data_service.add_resume(payload).await;
    Ok((StatusCode::CREATED, Json(resume)))
}
