use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::vacancy_dto::{
        CreateVacancyPayload, VacancyFilterOptions, VacancyListQuery, VacancyListResponse,
    },
    error::Result,
    models::vacancy::Vacancy,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/vacancies",
    params(
        ("search" = Option<String>, Query, description = "Text matched against title, company and description"),
        ("category" = Option<String>, Query, description = "Exact category"),
        ("workType" = Option<String>, Query, description = "Exact work type"),
        ("location" = Option<String>, Query, description = "Exact location"),
        ("sort" = Option<String>, Query, description = "newest or oldest")
    ),
    responses(
        (status = 200, description = "Matching vacancies", body = VacancyListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(query): Query<VacancyListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.data_service.list_vacancies(&query).await;
    Ok(Json(VacancyListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/filters",
    responses(
        (status = 200, description = "Values offered by the vacancy filters", body = VacancyFilterOptions)
    )
)]
#[axum::debug_handler]
pub async fn vacancy_filter_options(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.data_service.vacancy_filter_options().await))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found", body = Vacancy),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let vacancy = state.data_service.get_vacancy(id).await?;
    Ok(Json(vacancy))
}

#[utoipa::path(
    post,
    path = "/api/vacancies",
    request_body = CreateVacancyPayload,
    responses(
        (status = 201, description = "Vacancy created successfully", body = Vacancy),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Json(payload): Json<CreateVacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let vacancy = state.data_service.add_vacancy(payload).await;
    Ok((StatusCode::CREATED, Json(vacancy)))
}
