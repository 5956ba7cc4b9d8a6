use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{calculate, index, market_insights, property},
    AppState,
};

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(index::serve_index))
        .route("/calculate", post(calculate::calculate))
        .route("/save_property", post(property::save_property))
        .route("/get_saved_properties", get(property::get_saved_properties))
        .route("/delete_property/{id}", delete(property::delete_property))
        .route("/market_insights", get(market_insights::get_market_insights))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
