pub mod calculate;
pub mod index;
pub mod market_insights;
pub mod property;
