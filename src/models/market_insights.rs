use serde::{Deserialize, Serialize};

/// Average ARV for one square-footage bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArvBySqft {
    pub range: String,   // "500-1000", "2500+"
    pub avg_arv: u64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,   // "Jan"
    pub avg_mao: u64,
    pub avg_profit: u64,
}

/// One slice of the ROI distribution chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiBucket {
    pub range: String,   // "10-15%"
    pub count: u32,
    pub color: String,   // hex display color, "#ff6b6b"
}

/// Response structure for GET /market_insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsights {
    pub avg_arv_by_sqft: Vec<ArvBySqft>,
    pub monthly_trends: Vec<MonthlyTrend>,
    pub roi_distribution: Vec<RoiBucket>,
}
