use axum::{response::Json, Extension};
use serde_json::{json, Value};

use crate::middleware::AuthUser;

/// GET /protected - echo the identity the bearer token resolves to
pub async fn whoami(Extension(auth): Extension<AuthUser>) -> Json<Value> {
    Json(json!({ "logged_in_as": auth.email }))
}
