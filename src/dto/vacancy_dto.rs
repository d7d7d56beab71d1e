use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::vacancy::Vacancy;
use crate::services::filter::{SortOrder, VacancyCriteria};

/// Everything but `id` and `createdAt`, which the board assigns.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVacancyPayload {
    #[validate(custom(function = "crate::utils::validation::validate_not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank", message = "Company is required"))]
    pub company: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank", message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub employer_id: i64,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Work type is required"))]
    pub work_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct VacancyListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub work_type: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::query::empty_as_none")]
    pub sort: Option<SortOrder>,
}

impl VacancyListQuery {
    pub fn criteria(&self) -> VacancyCriteria {
        VacancyCriteria {
            search: self.search.clone(),
            category: self.category.clone(),
            work_type: self.work_type.clone(),
            location: self.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyListResponse {
    pub items: Vec<Vacancy>,
    pub total: usize,
}

impl From<Vec<Vacancy>> for VacancyListResponse {
    fn from(items: Vec<Vacancy>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VacancyFilterOptions {
    pub categories: Vec<String>,
    pub work_types: Vec<String>,
    pub locations: Vec<String>,
}
