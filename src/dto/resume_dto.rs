use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::resume::Resume;
use crate::services::filter::{ExperienceBucket, ResumeCriteria, SortOrder};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumePayload {
    pub user_id: i64,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank", message = "Full name is required"))]
    pub full_name: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank", message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeListQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::query::empty_as_none")]
    pub experience: Option<ExperienceBucket>,
    #[serde(default, deserialize_with = "crate::utils::query::empty_as_none")]
    pub sort: Option<SortOrder>,
}

impl ResumeListQuery {
    pub fn criteria(&self) -> ResumeCriteria {
        ResumeCriteria {
            search: self.search.clone(),
            location: self.location.clone(),
            experience: self.experience,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeListResponse {
    pub items: Vec<Resume>,
    pub total: usize,
}

impl From<Vec<Resume>> for ResumeListResponse {
    fn from(items: Vec<Resume>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFilterOptions {
    pub locations: Vec<String>,
    pub experience: Vec<ExperienceBucket>,
}
