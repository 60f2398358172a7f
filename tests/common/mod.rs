#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use starlog_api::auth::hash_password;
use starlog_api::database::models::{Person, Planet};
use starlog_api::database::{pool, repository};
use starlog_api::{app, AppState};

/// The service under test, as `app()` builds it
pub type App = NormalizePath<Router>;

pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "alice-password";
pub const BOB_EMAIL: &str = "bob@example.com";
pub const BOB_PASSWORD: &str = "bob-password";

/// Service over a fresh in-memory store seeded with two accounts,
/// three planets, and two people.
pub async fn build_test_app() -> Result<App> {
    // Single connection so every query sees the same in-memory database
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .context("failed to open in-memory database")?;

    pool::ensure_schema(&db).await?;

    repository::create_user(&db, ALICE_EMAIL, &hash_password(ALICE_PASSWORD), Some("Alice"), None)
        .await?;
    repository::create_user(&db, BOB_EMAIL, &hash_password(BOB_PASSWORD), Some("Bob"), None)
        .await?;

    for (name, climate, terrain, population, diameter) in [
        ("Tatooine", "arid", "desert", 200_000, 10_465),
        ("Alderaan", "temperate", "grasslands", 2_000_000_000, 12_500),
        ("Yavin IV", "tropical", "jungle", 1_000, 10_200),
    ] {
        repository::create_planet(
            &db,
            &Planet {
                id: 0,
                name: name.to_string(),
                climate: Some(climate.to_string()),
                terrain: Some(terrain.to_string()),
                population: Some(population),
                diameter: Some(diameter),
            },
        )
        .await?;
    }

    for (name, gender, hair, eyes, birth_year, height) in [
        ("Luke Skywalker", "male", "blond", "blue", "19BBY", 172),
        ("Leia Organa", "female", "brown", "brown", "19BBY", 150),
    ] {
        repository::create_person(
            &db,
            &Person {
                id: 0,
                name: name.to_string(),
                gender: Some(gender.to_string()),
                hair_color: Some(hair.to_string()),
                eye_color: Some(eyes.to_string()),
                birth_year: Some(birth_year.to_string()),
                height: Some(height),
            },
        )
        .await?;
    }

    Ok(app(AppState { pool: db }))
}

/// One request against the router; `bearer` adds an Authorization header.
pub async fn request(
    app: &App,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<Response<Body>> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    app.clone().oneshot(request).await.map_err(|e| anyhow::anyhow!("{e}"))
}

pub async fn get(app: &App, uri: &str) -> Result<Response<Body>> {
    request(app, "GET", uri, None, None).await
}

pub async fn body_json(response: Response<Body>) -> Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    serde_json::from_slice(&bytes).context("response body was not JSON")
}

/// Log in through the API and return the issued bearer token
pub async fn login(app: &App, email: &str, password: &str) -> Result<String> {
    let response = request(
        app,
        "POST",
        "/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await?;

    anyhow::ensure!(
        response.status() == StatusCode::CREATED,
        "login failed with status {}",
        response.status()
    );

    let body = body_json(response).await?;
    body["access_token"]
        .as_str()
        .map(str::to_string)
        .context("login response had no access_token")
}
