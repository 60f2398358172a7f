use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, verify_password, Claims};
use crate::database::repository;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login - verify credentials and issue a bearer token.
///
/// Responds 201 with `{"access_token": ...}`; the same 401 message covers
/// unknown email and wrong password so the response does not reveal which
/// part failed. The 201 (rather than 200) is part of the wire contract.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user = repository::user_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Bad email or password"))?;

    if !verify_password(&user.password_hash, &payload.password) {
        return Err(ApiError::unauthorized("Bad email or password"));
    }

    let access_token = generate_jwt(Claims::new(user.email))?;

    Ok((StatusCode::CREATED, Json(json!({ "access_token": access_token }))))
}
