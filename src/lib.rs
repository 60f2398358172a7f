use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

/// Shared application state, passed to handlers via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the full service. Tests call this directly with their own pool.
///
/// Trailing slashes are optional on every route, so the normalize layer
/// wraps the whole router and strips them before routing runs.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(catalog_routes())
        .merge(auth_public_routes())
        .merge(protected_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn catalog_routes() -> Router<AppState> {
    use handlers::public::catalog;

    Router::new()
        .route("/users", get(catalog::list_users))
        .route("/user/:id", get(catalog::get_user))
        .route("/people", get(catalog::list_people))
        .route("/people/:id", get(catalog::get_person))
        .route("/planets", get(catalog::list_planets))
        .route("/planets/:id", get(catalog::get_planet))
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new().route("/login", post(auth::login))
}

fn protected_routes() -> Router<AppState> {
    use handlers::protected::{auth, favorites};

    Router::new()
        .route("/protected", get(auth::whoami))
        .route("/users/favorites", get(favorites::list_favorites))
        .route(
            "/favorite/planet/:planet_id",
            post(favorites::add_favorite_planet).delete(favorites::remove_favorite_planet),
        )
        .route(
            "/favorite/people/:people_id",
            post(favorites::add_favorite_people).delete(favorites::remove_favorite_people),
        )
        .route_layer(from_fn(middleware::jwt_auth_middleware))
}

/// GET / - endpoint index (the API's sitemap)
async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Starlog API",
        "version": version,
        "endpoints": {
            "catalog": "/users, /user/:id, /people[/:id], /planets[/:id] (public)",
            "login": "POST /login (public - token acquisition)",
            "protected": "GET /protected (bearer)",
            "favorites": "/users/favorites, /favorite/planet/:id, /favorite/people/:id (bearer)",
        }
    }))
}

/// GET /health - liveness plus a database ping
async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::pool::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
