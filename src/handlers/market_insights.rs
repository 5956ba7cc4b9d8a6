use axum::{extract::State, Json};

use crate::{models::market_insights::MarketInsights, AppState};

/// Handler for GET /market_insights
pub async fn get_market_insights(State(state): State<AppState>) -> Json<MarketInsights> {
    Json(state.market_insights.insights())
}
