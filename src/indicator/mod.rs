pub mod holt;
pub mod volatility;
