use serde::{Deserialize, Serialize};

/// Static qualitative attributes of an item, as supplied by the upstream
/// feature pipeline. Every field is optional at the boundary; absent or
/// non-finite values fall back to the documented defaults in [`resolve`]
/// so the numeric core never sees NaN or divides by zero.
///
/// [`resolve`]: FeatureVector::resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Latest known market price, in the item's currency.
    pub current_price: Option<f64>,
    /// 0..=10.
    pub rarity_score: Option<f64>,
    /// 0..=100.
    pub popularity_score: Option<f64>,
    /// 0..=10.
    pub artist_score: Option<f64>,
    /// Percent change over the trailing 30 days.
    pub trend_30d: Option<f64>,
    /// Percent change over the trailing 90 days.
    pub trend_90d: Option<f64>,
    /// Percent change over the trailing year.
    pub trend_1y: Option<f64>,
    /// Annualized price volatility, in percent.
    pub volatility: Option<f64>,
    /// 0..=100, 50 is neutral.
    pub market_sentiment: Option<f64>,
}

pub const DEFAULT_CURRENT_PRICE: f64 = 50.0;
pub const DEFAULT_RARITY: f64 = 0.0;
pub const DEFAULT_POPULARITY: f64 = 50.0;
pub const DEFAULT_ARTIST: f64 = 5.0;
pub const DEFAULT_TREND: f64 = 0.0;
pub const DEFAULT_VOLATILITY: f64 = 15.0;
pub const DEFAULT_SENTIMENT: f64 = 50.0;

/// Feature vector after default substitution and range clamping. All
/// downstream math works on this form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFeatures {
    pub current_price: f64,
    pub rarity_score: f64,
    pub popularity_score: f64,
    pub artist_score: f64,
    pub trend_30d: f64,
    pub trend_90d: f64,
    pub trend_1y: f64,
    pub volatility: f64,
    pub market_sentiment: f64,
}

impl FeatureVector {
    /// Substitute defaults for absent or non-finite fields and clamp each
    /// score to its documented range. Trends are left unclamped; they are
    /// banded by the consumers.
    pub fn resolve(&self) -> ResolvedFeatures {
        ResolvedFeatures {
            current_price: positive_or(self.current_price, DEFAULT_CURRENT_PRICE),
            rarity_score: finite_or(self.rarity_score, DEFAULT_RARITY).clamp(0.0, 10.0),
            popularity_score: finite_or(self.popularity_score, DEFAULT_POPULARITY)
                .clamp(0.0, 100.0),
            artist_score: finite_or(self.artist_score, DEFAULT_ARTIST).clamp(0.0, 10.0),
            trend_30d: finite_or(self.trend_30d, DEFAULT_TREND),
            trend_90d: finite_or(self.trend_90d, DEFAULT_TREND),
            trend_1y: finite_or(self.trend_1y, DEFAULT_TREND),
            volatility: finite_or(self.volatility, DEFAULT_VOLATILITY).max(0.0),
            market_sentiment: finite_or(self.market_sentiment, DEFAULT_SENTIMENT)
                .clamp(0.0, 100.0),
        }
    }
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

fn positive_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vector_resolves_to_defaults() {
        let r = FeatureVector::default().resolve();
        assert!((r.current_price - DEFAULT_CURRENT_PRICE).abs() < f64::EPSILON);
        assert!((r.rarity_score - DEFAULT_RARITY).abs() < f64::EPSILON);
        assert!((r.popularity_score - DEFAULT_POPULARITY).abs() < f64::EPSILON);
        assert!((r.artist_score - DEFAULT_ARTIST).abs() < f64::EPSILON);
        assert!((r.volatility - DEFAULT_VOLATILITY).abs() < f64::EPSILON);
        assert!((r.market_sentiment - DEFAULT_SENTIMENT).abs() < f64::EPSILON);
        assert_eq!(r.trend_1y, 0.0);
    }

    #[test]
    fn nan_and_zero_price_fall_back() {
        let f = FeatureVector {
            current_price: Some(0.0),
            rarity_score: Some(f64::NAN),
            volatility: Some(f64::INFINITY),
            ..Default::default()
        };
        let r = f.resolve();
        assert!((r.current_price - DEFAULT_CURRENT_PRICE).abs() < f64::EPSILON);
        assert!((r.rarity_score - DEFAULT_RARITY).abs() < f64::EPSILON);
        assert!((r.volatility - DEFAULT_VOLATILITY).abs() < f64::EPSILON);
    }

    #[test]
    fn scores_are_clamped_to_range() {
        let f = FeatureVector {
            rarity_score: Some(14.0),
            popularity_score: Some(-3.0),
            market_sentiment: Some(250.0),
            volatility: Some(-5.0),
            ..Default::default()
        };
        let r = f.resolve();
        assert!((r.rarity_score - 10.0).abs() < f64::EPSILON);
        assert_eq!(r.popularity_score, 0.0);
        assert!((r.market_sentiment - 100.0).abs() < f64::EPSILON);
        assert_eq!(r.volatility, 0.0);
    }
}
