use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Join row linking a user to exactly one catalog entity.
///
/// The row keeps the two nullable foreign keys for wire compatibility
/// (`{id, user_id, planet_id, people_id}`), but all writes go through
/// [`FavoriteTarget`] and a table CHECK guarantees exactly one is set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

/// The catalog entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    People(i64),
}

impl FavoriteTarget {
    /// Column values for (planet_id, people_id)
    pub fn column_values(&self) -> (Option<i64>, Option<i64>) {
        match self {
            FavoriteTarget::Planet(id) => (Some(*id), None),
            FavoriteTarget::People(id) => (None, Some(*id)),
        }
    }
}

impl Favorite {
    /// Resolve the row's target, rejecting rows that violate the
    /// exactly-one-of contract (the table CHECK prevents storing them).
    pub fn target(&self) -> Result<FavoriteTarget, MalformedFavorite> {
        match (self.planet_id, self.people_id) {
            (Some(planet_id), None) => Ok(FavoriteTarget::Planet(planet_id)),
            (None, Some(people_id)) => Ok(FavoriteTarget::People(people_id)),
            _ => Err(MalformedFavorite { id: self.id }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("favorite {id} does not reference exactly one catalog entity")]
pub struct MalformedFavorite {
    pub id: i64,
}
