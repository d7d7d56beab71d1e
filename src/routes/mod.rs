pub mod auth;
pub mod docs;
pub mod health;
pub mod profile;
pub mod resume;
pub mod vacancy;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn api_router() -> Router<AppState> {
    let vacancy_api = Router::new()
        .route(
            "/api/vacancies",
            get(vacancy::list_vacancies).post(vacancy::create_vacancy),
        )
        .route("/api/vacancies/filters", get(vacancy::vacancy_filter_options))
        .route("/api/vacancies/:id", get(vacancy::get_vacancy));

    let resume_api = Router::new()
        .route(
            "/api/resumes",
            get(resume::list_resumes).post(resume::create_resume),
        )
        .route("/api/resumes/filters", get(resume::resume_filter_options))
        .route("/api/resumes/:id", get(resume::get_resume));

    let account_api = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        .route("/api/profile", get(profile::get_profile));

    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(docs::openapi_json))
        .merge(vacancy_api)
        .merge(resume_api)
        .merge(account_api)
}
