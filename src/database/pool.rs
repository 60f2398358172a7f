use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;

/// Open the connection pool described by config and prepare the store.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    // SQLite does not enforce foreign keys unless asked
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    ensure_schema(&pool).await?;

    info!("Database ready at {}", config.url);
    Ok(pool)
}

/// Bootstrap the schema. Idempotent, runs on every startup.
///
/// The favorites CHECK enforces the exactly-one-of contract between
/// planet_id and people_id at the store level.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            first_name    TEXT,
            last_name     TEXT,
            is_active     INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            climate    TEXT,
            terrain    TEXT,
            population INTEGER,
            diameter   INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            gender     TEXT,
            hair_color TEXT,
            eye_color  TEXT,
            birth_year TEXT,
            height     INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id   INTEGER NOT NULL REFERENCES users(id),
            planet_id INTEGER REFERENCES planets(id),
            people_id INTEGER REFERENCES people(id),
            CHECK ((planet_id IS NULL) + (people_id IS NULL) = 1)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
