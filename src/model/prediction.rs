use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk classification derived from simulated downside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Discrete action derived from the reward/risk decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    ConsiderSelling,
    Sell,
}

/// The three named output price paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenarios {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub volatility: f64,
    pub downside_risk_pct: f64,
    pub upside_potential_pct: f64,
    pub reward_risk_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketFactors {
    pub sentiment_multiplier: f64,
    pub popularity_score: f64,
    pub market_sentiment: f64,
    pub current_trend: f64,
}

/// Full output of one hybrid prediction call. Stateless and recomputed on
/// every call; persistence is a collaborator's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
    pub scenarios: Scenarios,
    pub risk_assessment: RiskAssessment,
    pub market_factors: MarketFactors,
    pub target_date: DateTime<Utc>,
    pub years_ahead: u32,
    pub recommendation: Recommendation,
    /// Moderate scenario of the time-series leg, before blending.
    pub time_series_component: f64,
    /// Feature growth model estimate, before blending.
    pub feature_component: f64,
}

/// Per-year summary row for charting, trimmed from a full
/// [`PredictionResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub years_ahead: u32,
    pub target_date: DateTime<Utc>,
    pub predicted_price: f64,
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
}

impl From<&PredictionResult> for TimelinePoint {
    fn from(p: &PredictionResult) -> Self {
        Self {
            years_ahead: p.years_ahead,
            target_date: p.target_date,
            predicted_price: p.predicted_price,
            conservative: p.scenarios.conservative,
            moderate: p.scenarios.moderate,
            aggressive: p.scenarios.aggressive,
            confidence_lower: p.confidence_lower,
            confidence_upper: p.confidence_upper,
            risk_level: p.risk_assessment.risk_level,
            recommendation: p.recommendation,
        }
    }
}
