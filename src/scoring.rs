//! Investment scoring, independent of the simulator. A pure function of
//! the feature vector: five weighted sub-scores, fixed penalties and a
//! confluence bonus, clamped to the 1..=10 rating scale.

use crate::model::features::{FeatureVector, ResolvedFeatures};
use crate::model::rating::{InvestmentRating, RatingLabel};

const W_FUNDAMENTALS: f64 = 0.30;
const W_MOMENTUM: f64 = 0.25;
const W_SENTIMENT: f64 = 0.15;
const W_STABILITY: f64 = 0.15;
const W_VALUATION: f64 = 0.15;

// Fixed realistic trend ranges for min-max scaling, in percent.
const TREND_30D_RANGE: (f64, f64) = (-20.0, 30.0);
const TREND_90D_RANGE: (f64, f64) = (-25.0, 40.0);
const TREND_1Y_RANGE: (f64, f64) = (-30.0, 60.0);

// Sweet-spot bands for stability scoring.
const VOL_IDEAL: (f64, f64) = (5.0, 20.0);
const VOL_BOUNDS: (f64, f64) = (0.0, 60.0);
const PRICE_IDEAL: (f64, f64) = (50.0, 1500.0);
const PRICE_BOUNDS: (f64, f64) = (1.0, 20_000.0);

// Price tier boundaries for the valuation sub-score.
const PRICE_TIERS: [f64; 4] = [50.0, 200.0, 1000.0, 5000.0];
const OVERPRICED_TIER_PENALTY: f64 = 2.5;

const CRASH_TREND_1Y: f64 = -20.0;
const CRASH_TREND_PENALTY: f64 = 1.5;
const SLUMP_TREND_30D: f64 = -15.0;
const SLUMP_TREND_PENALTY: f64 = 0.5;
const EXTREME_VOLATILITY: f64 = 45.0;
const EXTREME_VOL_PENALTY: f64 = 1.0;

const CONFLUENCE_BONUS: f64 = 0.5;

/// Score a feature vector on the 1..=10 scale and map it to a rating
/// label via the fixed thresholds.
pub fn score(features: &FeatureVector) -> InvestmentRating {
    let f = features.resolve();

    let fundamentals = fundamentals_score(&f);
    let momentum = momentum_score(&f);
    let sentiment = sentiment_score(&f);
    let stability = stability_score(&f);
    let valuation = valuation_score(&f);

    let mut composite = W_FUNDAMENTALS * fundamentals
        + W_MOMENTUM * momentum
        + W_SENTIMENT * sentiment
        + W_STABILITY * stability
        + W_VALUATION * valuation;

    if f.trend_1y < CRASH_TREND_1Y {
        composite -= CRASH_TREND_PENALTY;
    }
    if f.trend_30d < SLUMP_TREND_30D {
        composite -= SLUMP_TREND_PENALTY;
    }
    if f.volatility > EXTREME_VOLATILITY {
        composite -= EXTREME_VOL_PENALTY;
    }
    if fundamentals >= 7.0 && momentum >= 6.5 && sentiment >= 6.5 {
        composite += CONFLUENCE_BONUS;
    }

    let score = round2(composite.clamp(1.0, 10.0));
    InvestmentRating {
        score,
        label: RatingLabel::from_score(score),
    }
}

/// Piecewise-linear band scorer: 1.0 inside the ideal range, linear decay
/// to 0.0 at the absolute bounds, 0.0 outside them.
pub fn band_score(value: f64, ideal: (f64, f64), bounds: (f64, f64)) -> f64 {
    let (ideal_lo, ideal_hi) = ideal;
    let (min, max) = bounds;
    if value < min || value > max {
        return 0.0;
    }
    if value >= ideal_lo && value <= ideal_hi {
        return 1.0;
    }
    if value < ideal_lo {
        let span = ideal_lo - min;
        if span <= f64::EPSILON {
            return 1.0;
        }
        (value - min) / span
    } else {
        let span = max - ideal_hi;
        if span <= f64::EPSILON {
            return 1.0;
        }
        (max - value) / span
    }
}

fn fundamentals_score(f: &ResolvedFeatures) -> f64 {
    ((f.rarity_score / 10.0) * 0.4 + (f.popularity_score / 100.0) * 0.4
        + (f.artist_score / 10.0) * 0.2)
        * 10.0
}

/// Weighted blend of the three trend horizons, each min-max scaled
/// against a fixed realistic range. Longer horizons dominate.
fn momentum_score(f: &ResolvedFeatures) -> f64 {
    let t30 = min_max(f.trend_30d, TREND_30D_RANGE);
    let t90 = min_max(f.trend_90d, TREND_90D_RANGE);
    let t1y = min_max(f.trend_1y, TREND_1Y_RANGE);
    (t30 * 0.25 + t90 * 0.30 + t1y * 0.45) * 10.0
}

fn sentiment_score(f: &ResolvedFeatures) -> f64 {
    ((f.market_sentiment / 100.0) * 0.65 + (f.popularity_score / 100.0) * 0.35) * 10.0
}

/// Both a dormant and a frantic market score poorly; same for prices at
/// either extreme of the collectible range.
fn stability_score(f: &ResolvedFeatures) -> f64 {
    let vol_band = band_score(f.volatility, VOL_IDEAL, VOL_BOUNDS);
    let price_band = band_score(f.current_price, PRICE_IDEAL, PRICE_BOUNDS);
    (vol_band * 0.6 + price_band * 0.4) * 10.0
}

/// Compare the price tier the fundamentals imply against the tier the
/// item actually trades in. Overpricing costs points; trading at or
/// below the implied tier does not.
fn valuation_score(f: &ResolvedFeatures) -> f64 {
    let fundamentals01 = (fundamentals_score(f) / 10.0).clamp(0.0, 1.0);
    let implied_tier = (fundamentals01 * 4.0).round();
    let actual_tier = price_tier(f.current_price) as f64;
    let overpriced = (actual_tier - implied_tier).max(0.0);
    (10.0 - overpriced * OVERPRICED_TIER_PENALTY).clamp(0.0, 10.0)
}

fn price_tier(price: f64) -> usize {
    PRICE_TIERS.iter().filter(|&&t| price >= t).count()
}

fn min_max(value: f64, range: (f64, f64)) -> f64 {
    let (lo, hi) = range;
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_score_shape() {
        let ideal = (5.0, 20.0);
        let bounds = (0.0, 60.0);
        assert_eq!(band_score(10.0, ideal, bounds), 1.0);
        assert_eq!(band_score(5.0, ideal, bounds), 1.0);
        assert_eq!(band_score(20.0, ideal, bounds), 1.0);
        assert!((band_score(2.5, ideal, bounds) - 0.5).abs() < 1e-12);
        assert!((band_score(40.0, ideal, bounds) - 0.5).abs() < 1e-12);
        assert_eq!(band_score(-1.0, ideal, bounds), 0.0);
        assert_eq!(band_score(61.0, ideal, bounds), 0.0);
    }

    #[test]
    fn price_tiers_partition_the_range() {
        assert_eq!(price_tier(10.0), 0);
        assert_eq!(price_tier(50.0), 1);
        assert_eq!(price_tier(199.0), 1);
        assert_eq!(price_tier(200.0), 2);
        assert_eq!(price_tier(1000.0), 3);
        assert_eq!(price_tier(9999.0), 4);
    }

    #[test]
    fn momentum_is_monotone_in_each_trend() {
        let weak = ResolvedFeatures {
            trend_1y: -10.0,
            ..FeatureVector::default().resolve()
        };
        let strong = ResolvedFeatures {
            trend_1y: 40.0,
            ..FeatureVector::default().resolve()
        };
        assert!(momentum_score(&strong) > momentum_score(&weak));
    }
}
