use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::auth_dto::{AccountRole, ProfileResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile of the logged-in user", body = ProfileResponse),
        (status = 401, description = "Not authenticated")
    )
)]
#[axum::debug_handler]
pub async fn get_profile(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let user = state.auth_service.require_user().await?;

    let (role, vacancies, resumes) = if user.is_employer {
        let vacancies = state.data_service.vacancies_by_employer(user.id).await;
        (AccountRole::Employer, vacancies, Vec::new())
    } else {
        let resumes = state.data_service.resumes_by_user(user.id).await;
        (AccountRole::JobSeeker, Vec::new(), resumes)
    };

    Ok(Json(ProfileResponse {
        role,
        vacancy_count: vacancies.len(),
        resume_count: resumes.len(),
        vacancies,
        resumes,
        user,
    }))
}
