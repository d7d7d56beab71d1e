use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account record. This is also the exact shape persisted as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub is_employer: bool,
}
