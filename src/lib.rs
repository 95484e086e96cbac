pub mod modules;
pub mod shared;

use axum::Router;
use shared::state::AppState;
use tower_http::trace::TraceLayer;

/// Assemble the full API router over the given state. Every module hangs
/// its routes under `/api`; the handlers are thin adapters over the
/// repositories and services in [`AppState`].
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(modules::animal::routes::router())
        .merge(modules::enclosure::routes::router())
        .merge(modules::feeding::routes::router())
        .merge(modules::statistics::routes::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
