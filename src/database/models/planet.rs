use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog entity, read-only via the API; rows are seeded externally.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i64>,
}
