use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingLabel {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Underperform,
    Sell,
}

impl RatingLabel {
    /// Fixed thresholds shared with the scorer; exposed so callers can map
    /// a stored score back to its label.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            Self::StrongBuy
        } else if score >= 7.0 {
            Self::Buy
        } else if score >= 5.5 {
            Self::Hold
        } else if score >= 4.0 {
            Self::Underperform
        } else {
            Self::Sell
        }
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Underperform => "Underperform",
            Self::Sell => "Sell",
        };
        f.write_str(s)
    }
}

/// Pure function of a feature vector; carries no engine state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRating {
    /// 1..=10.
    pub score: f64,
    pub label: RatingLabel,
}
