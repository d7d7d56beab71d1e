use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::{resume::Resume, user::User, vacancy::Vacancy};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "Please enter email and password"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please enter email and password"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub username: String,
    #[validate(
        length(min = 1, message = "Please fill in all required fields"),
        custom(
            function = "crate::utils::validation::validate_email_format",
            message = "Please enter a valid email address"
        )
    )]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub confirm_password: String,
    /// Full name, or the company name for employers.
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub name: String,
    #[serde(default)]
    pub is_employer: bool,
}

impl RegisterPayload {
    pub fn ensure_passwords_match(&self) -> Result<()> {
        if self.password != self.confirm_password {
            return Err(Error::BadRequest("Passwords do not match".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl From<Option<User>> for SessionResponse {
    fn from(user: Option<User>) -> Self {
        Self {
            is_authenticated: user.is_some(),
            user,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum AccountRole {
    Employer,
    JobSeeker,
}

/// Employers see their postings; job seekers see their resumes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: User,
    pub role: AccountRole,
    pub vacancies: Vec<Vacancy>,
    pub resumes: Vec<Resume>,
    pub vacancy_count: usize,
    pub resume_count: usize,
}
