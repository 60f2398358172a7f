//! Favorites management for the authenticated user.
//!
//! Every mutating handler follows the same skeleton: resolve the token's
//! user, resolve the target catalog entity, check the favorite row, mutate,
//! respond. Status codes and body keys are wire contract: 404s here use a
//! `msg` key, and delete-success responds 201.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::database::models::{Favorite, FavoriteTarget, User};
use crate::database::repository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// GET /users/favorites - all favorites owned by the token's user.
///
/// An empty result responds 404, not an empty 200 list; kept as-is per the
/// existing contract.
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    // Defensive: a valid token can outlive its account
    let user = repository::user_by_email(&state.pool, &auth.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User doesn't exist"))?;

    let favorites = repository::favorites_for_user(&state.pool, user.id).await?;

    if favorites.is_empty() {
        return Err(ApiError::missing_resource("There are no favorites"));
    }
    Ok(Json(favorites))
}

/// POST /favorite/planet/:planet_id
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(planet_id): Path<i64>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let user = resolve_user(&state.pool, &auth.email).await?;
    let target = resolve_planet_target(&state.pool, planet_id).await?;

    let favorite = repository::insert_favorite(&state.pool, user.id, target).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorite/planet/:planet_id
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(planet_id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user = resolve_user(&state.pool, &auth.email).await?;
    let target = resolve_planet_target(&state.pool, planet_id).await?;

    remove_favorite(&state.pool, user.id, target).await
}

/// POST /favorite/people/:people_id
pub async fn add_favorite_people(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(people_id): Path<i64>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let user = resolve_user(&state.pool, &auth.email).await?;
    let target = resolve_people_target(&state.pool, people_id).await?;

    let favorite = repository::insert_favorite(&state.pool, user.id, target).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorite/people/:people_id
pub async fn remove_favorite_people(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(people_id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user = resolve_user(&state.pool, &auth.email).await?;
    let target = resolve_people_target(&state.pool, people_id).await?;

    remove_favorite(&state.pool, user.id, target).await
}

/// Map the token's email to an account row
async fn resolve_user(pool: &SqlitePool, email: &str) -> Result<User, ApiError> {
    repository::user_by_email(pool, email)
        .await?
        .ok_or_else(|| ApiError::missing_resource("User doesn't exist"))
}

async fn resolve_planet_target(
    pool: &SqlitePool,
    planet_id: i64,
) -> Result<FavoriteTarget, ApiError> {
    repository::planet_by_id(pool, planet_id)
        .await?
        .map(|planet| FavoriteTarget::Planet(planet.id))
        .ok_or_else(|| ApiError::missing_resource("Planet doesn't exist"))
}

async fn resolve_people_target(
    pool: &SqlitePool,
    people_id: i64,
) -> Result<FavoriteTarget, ApiError> {
    repository::person_by_id(pool, people_id)
        .await?
        .map(|person| FavoriteTarget::People(person.id))
        .ok_or_else(|| ApiError::missing_resource("People doesn't exist"))
}

/// Shared delete tail: locate the (user, target) row, remove it, confirm.
/// Calling twice after one add yields the 404 on the second call.
async fn remove_favorite(
    pool: &SqlitePool,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let favorite = repository::find_favorite(pool, user_id, target)
        .await?
        .ok_or_else(|| ApiError::missing_resource("Favorite doesn't exist"))?;

    repository::delete_favorite(pool, favorite.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "msg": "Favorite successfully deleted" })),
    ))
}
