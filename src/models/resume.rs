use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub title: String,
    pub location: String,
    /// Free text, e.g. "3 года".
    pub experience: String,
    pub skills: Vec<String>,
    pub education: String,
    pub about: String,
    pub salary: String,
    pub contact: String,
    pub created_at: NaiveDate,
}
