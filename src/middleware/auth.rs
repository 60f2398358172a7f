use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;

/// Authenticated caller identity extracted from a bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { email: claims.sub }
    }
}

/// Bearer-token middleware: validates the token and injects [`AuthUser`]
/// into request extensions for protected handlers.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)?;
    let claims = validate_jwt(&token)?;

    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err(ApiError::unauthorized("Empty bearer token"));
        }
        Ok(token.to_string())
    } else {
        Err(ApiError::unauthorized(
            "Authorization header must use Bearer token format",
        ))
    }
}
