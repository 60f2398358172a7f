use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::models::{Person, Planet, User};
use crate::database::repository;
use crate::error::ApiError;
use crate::AppState;

/// GET /users - all accounts
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = repository::list_users(&state.pool).await?;
    Ok(Json(users))
}

/// GET /user/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = repository::user_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}

/// GET /people - full people catalog
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = repository::list_people(&state.pool).await?;
    Ok(Json(people))
}

/// GET /people/:id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Person>, ApiError> {
    let person = repository::person_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Person not found"))?;
    Ok(Json(person))
}

/// GET /planets - full planet catalog
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = repository::list_planets(&state.pool).await?;
    Ok(Json(planets))
}

/// GET /planets/:id
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Planet>, ApiError> {
    let planet = repository::planet_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Planet not found"))?;
    Ok(Json(planet))
}
