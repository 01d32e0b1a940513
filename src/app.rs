use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, SecurityConfig};
use crate::database::EntityStore;
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;

/// Shared per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    /// Maximum pokemon per team
    pub team_capacity: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, team_capacity: usize) -> Self {
        Self { store, team_capacity }
    }
}

pub fn app(state: AppState) -> Router {
    let config = config::config();

    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/names", get(public::names))
        // Protected
        .merge(protected_routes())
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.security))
                .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
        )
        .with_state(state)
}

fn protected_routes() -> Router<AppState> {
    use axum::routing::patch;
    use protected::{pokemon, team, team_pokemon};

    Router::new()
        .route("/teams", get(team::list).post(team::create))
        .route(
            "/teams/:id",
            get(team::show).patch(team::update).delete(team::delete),
        )
        .route(
            "/teams/:id/pokemons",
            get(team_pokemon::list).post(team_pokemon::create),
        )
        .route(
            "/teams/:id/pokemons/:pokemon_id",
            patch(team_pokemon::update).delete(team_pokemon::delete),
        )
        .route(
            "/pokemons/:id",
            get(pokemon::show).patch(pokemon::update).delete(pokemon::delete),
        )
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if crate::is_development!() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
