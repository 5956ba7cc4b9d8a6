pub mod calculation;
pub mod market_insights;
pub mod property;
pub mod response;
