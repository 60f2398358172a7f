//! Typed queries over the connection pool.
//!
//! Handlers call the lookup and favorite functions; the create functions
//! exist for seeding (catalog rows and accounts are managed externally,
//! no route creates them).

use sqlx::SqlitePool;

use crate::database::models::{Favorite, FavoriteTarget, Person, Planet, User};

// --- users ---

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<User, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO users (email, password_hash, first_name, last_name) VALUES (?, ?, ?, ?)",
    )
    .bind(email)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .execute(pool)
    .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        first_name: first_name.map(str::to_string),
        last_name: last_name.map(str::to_string),
        is_active: true,
    })
}

// --- planets ---

pub async fn list_planets(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>("SELECT * FROM planets ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn planet_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>("SELECT * FROM planets WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_planet(pool: &SqlitePool, planet: &Planet) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO planets (name, climate, terrain, population, diameter) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&planet.name)
    .bind(&planet.climate)
    .bind(&planet.terrain)
    .bind(planet.population)
    .bind(planet.diameter)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

// --- people ---

pub async fn list_people(pool: &SqlitePool) -> Result<Vec<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>("SELECT * FROM people ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn person_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>("SELECT * FROM people WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_person(pool: &SqlitePool, person: &Person) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO people (name, gender, hair_color, eye_color, birth_year, height) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&person.name)
    .bind(&person.gender)
    .bind(&person.hair_color)
    .bind(&person.eye_color)
    .bind(&person.birth_year)
    .bind(person.height)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

// --- favorites ---

pub async fn favorites_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>("SELECT * FROM favorites WHERE user_id = ? ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Insert a favorite row. Duplicates are allowed: calling twice for the same
/// (user, target) pair creates two rows.
pub async fn insert_favorite(
    pool: &SqlitePool,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<Favorite, sqlx::Error> {
    let (planet_id, people_id) = target.column_values();

    let result = sqlx::query("INSERT INTO favorites (user_id, planet_id, people_id) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(planet_id)
        .bind(people_id)
        .execute(pool)
        .await?;

    Ok(Favorite {
        id: result.last_insert_rowid(),
        user_id,
        planet_id,
        people_id,
    })
}

/// First favorite row for (user, target), if any
pub async fn find_favorite(
    pool: &SqlitePool,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<Option<Favorite>, sqlx::Error> {
    let query = match target {
        FavoriteTarget::Planet(_) => {
            "SELECT * FROM favorites WHERE user_id = ? AND planet_id = ? ORDER BY id LIMIT 1"
        }
        FavoriteTarget::People(_) => {
            "SELECT * FROM favorites WHERE user_id = ? AND people_id = ? ORDER BY id LIMIT 1"
        }
    };

    let (FavoriteTarget::Planet(target_id) | FavoriteTarget::People(target_id)) = target;

    sqlx::query_as::<_, Favorite>(query)
        .bind(user_id)
        .bind(target_id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_favorite(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM favorites WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::pool::ensure_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();

        create_user(&pool, "alice@example.com", "digest", Some("Alice"), None)
            .await
            .unwrap();
        create_planet(
            &pool,
            &Planet {
                id: 0,
                name: "Tatooine".to_string(),
                climate: Some("arid".to_string()),
                terrain: Some("desert".to_string()),
                population: Some(200_000),
                diameter: Some(10_465),
            },
        )
        .await
        .unwrap();
        create_person(
            &pool,
            &Person {
                id: 0,
                name: "Luke Skywalker".to_string(),
                gender: Some("male".to_string()),
                hair_color: Some("blond".to_string()),
                eye_color: Some("blue".to_string()),
                birth_year: Some("19BBY".to_string()),
                height: Some(172),
            },
        )
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn lookups_round_trip_seeded_rows() {
        let pool = seeded_pool().await;

        let user = user_by_email(&pool, "alice@example.com").await.unwrap().unwrap();
        assert_eq!(user.id, 1);
        assert!(user.is_active);

        let planet = planet_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.population, Some(200_000));

        let person = person_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(person.name, "Luke Skywalker");

        assert!(planet_by_id(&pool, 99).await.unwrap().is_none());
        assert!(person_by_id(&pool, 99).await.unwrap().is_none());
        assert!(user_by_id(&pool, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn favorite_lifecycle() {
        let pool = seeded_pool().await;

        let favorite = insert_favorite(&pool, 1, FavoriteTarget::Planet(1)).await.unwrap();
        assert_eq!(favorite.user_id, 1);
        assert_eq!(favorite.planet_id, Some(1));
        assert_eq!(favorite.people_id, None);

        let found = find_favorite(&pool, 1, FavoriteTarget::Planet(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, favorite.id);

        // No dedup: a second insert creates a distinct row
        let duplicate = insert_favorite(&pool, 1, FavoriteTarget::Planet(1)).await.unwrap();
        assert_ne!(duplicate.id, favorite.id);
        assert_eq!(favorites_for_user(&pool, 1).await.unwrap().len(), 2);

        delete_favorite(&pool, favorite.id).await.unwrap();
        delete_favorite(&pool, duplicate.id).await.unwrap();
        assert!(favorites_for_user(&pool, 1).await.unwrap().is_empty());
        assert!(find_favorite(&pool, 1, FavoriteTarget::Planet(1))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn people_favorites_use_people_column() {
        let pool = seeded_pool().await;

        let favorite = insert_favorite(&pool, 1, FavoriteTarget::People(1)).await.unwrap();
        assert_eq!(favorite.planet_id, None);
        assert_eq!(favorite.people_id, Some(1));

        // The planet lookup must not see a people favorite
        assert!(find_favorite(&pool, 1, FavoriteTarget::Planet(1))
            .await
            .unwrap()
            .is_none());
        assert!(find_favorite(&pool, 1, FavoriteTarget::People(1))
            .await
            .unwrap()
            .is_some());
    }
}
