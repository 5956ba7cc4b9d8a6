//! Market insights provider
//!
//! The chart data is a fixed sample; nothing here is derived from saved
//! properties.

use crate::models::market_insights::{ArvBySqft, MarketInsights, MonthlyTrend, RoiBucket};

pub trait MarketInsightsProvider: Send + Sync {
    fn insights(&self) -> MarketInsights;
}

/// Hardcoded sample market data
#[derive(Debug, Clone, Default)]
pub struct StaticMarketInsights;

impl MarketInsightsProvider for StaticMarketInsights {
    fn insights(&self) -> MarketInsights {
        MarketInsights {
            avg_arv_by_sqft: vec![
                arv_bucket("500-1000", 120000, 15),
                arv_bucket("1000-1500", 180000, 25),
                arv_bucket("1500-2000", 240000, 20),
                arv_bucket("2000-2500", 300000, 18),
                arv_bucket("2500+", 400000, 12),
            ],
            monthly_trends: vec![
                trend("Jan", 85000, 25000),
                trend("Feb", 87000, 26000),
                trend("Mar", 90000, 28000),
                trend("Apr", 92000, 27000),
                trend("May", 95000, 29000),
                trend("Jun", 98000, 31000),
            ],
            roi_distribution: vec![
                roi_bucket("10-15%", 8, "#ff6b6b"),
                roi_bucket("15-20%", 15, "#4ecdc4"),
                roi_bucket("20-25%", 22, "#45b7d1"),
                roi_bucket("25-30%", 18, "#96ceb4"),
                roi_bucket("30%+", 12, "#ffeaa7"),
            ],
        }
    }
}

fn arv_bucket(range: &str, avg_arv: u64, count: u32) -> ArvBySqft {
    ArvBySqft {
        range: range.to_string(),
        avg_arv,
        count,
    }
}

fn trend(month: &str, avg_mao: u64, avg_profit: u64) -> MonthlyTrend {
    MonthlyTrend {
        month: month.to_string(),
        avg_mao,
        avg_profit,
    }
}

fn roi_bucket(range: &str, count: u32, color: &str) -> RoiBucket {
    RoiBucket {
        range: range.to_string(),
        count,
        color: color.to_string(),
    }
}
