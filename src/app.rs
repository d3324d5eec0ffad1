use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{accounts, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(health::router())
        .merge(accounts::router())
        .layer(cors_layer())
        .with_state(state)
}

// The frontend is served from a different origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
