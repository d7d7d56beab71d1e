use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free text as the employer wrote it, e.g. "120 000 - 180 000 ₽".
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub employer_id: i64,
    pub created_at: NaiveDate,
    pub category: String,
    pub work_type: String,
}
