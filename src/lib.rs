// src/lib.rs

use std::sync::Arc;

use services::{
    market_insights::{MarketInsightsProvider, StaticMarketInsights},
    property_registry::{InMemoryPropertyRegistry, PropertyRegistry},
};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn PropertyRegistry>,
    pub market_insights: Arc<dyn MarketInsightsProvider>,
}

impl AppState {
    pub fn new(
        registry: Arc<dyn PropertyRegistry>,
        market_insights: Arc<dyn MarketInsightsProvider>,
    ) -> Self {
        Self {
            registry,
            market_insights,
        }
    }

    /// State backed by an empty in-memory registry and the sample insights
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPropertyRegistry::new()),
            Arc::new(StaticMarketInsights),
        )
    }
}

pub mod services {
    pub mod deal_calculator;
    pub mod market_insights;
    pub mod property_registry;
}

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
