use axum::response::{IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::auth_dto::{
    AccountRole, LoginPayload, ProfileResponse, RegisterPayload, SessionResponse,
};
use crate::dto::resume_dto::{CreateResumePayload, ResumeFilterOptions, ResumeListResponse};
use crate::dto::vacancy_dto::{CreateVacancyPayload, VacancyFilterOptions, VacancyListResponse};
use crate::models::{resume::Resume, user::User, vacancy::Vacancy};
use crate::services::filter::{ExperienceBucket, SortOrder};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::vacancy::list_vacancies,
        crate::routes::vacancy::vacancy_filter_options,
        crate::routes::vacancy::get_vacancy,
        crate::routes::vacancy::create_vacancy,
        crate::routes::resume::list_resumes,
        crate::routes::resume::resume_filter_options,
        crate::routes::resume::get_resume,
        crate::routes::resume::create_resume,
        crate::routes::auth::login,
        crate::routes::auth::register,
        crate::routes::auth::logout,
        crate::routes::auth::session,
        crate::routes::profile::get_profile,
    ),
    components(schemas(
        Vacancy,
        Resume,
        User,
        CreateVacancyPayload,
        VacancyListResponse,
        VacancyFilterOptions,
        CreateResumePayload,
        ResumeListResponse,
        ResumeFilterOptions,
        ExperienceBucket,
        SortOrder,
        LoginPayload,
        RegisterPayload,
        SessionResponse,
        AccountRole,
        ProfileResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
