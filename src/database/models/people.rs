use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog entity, read-only via the API; rows are seeded externally.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<i64>,
}
