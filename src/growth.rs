use crate::config::GrowthConfig;
use crate::model::features::ResolvedFeatures;

/// Bounds for the sentiment multiplier. Qualitative signal reaches the
/// stochastic path only through this channel, so the band is kept tight
/// to stop it compounding into runaway growth over long horizons.
pub const SENTIMENT_MULT_MIN: f64 = 0.85;
pub const SENTIMENT_MULT_MAX: f64 = 1.25;

/// Map popularity, market sentiment, and 1-year momentum into a bounded
/// growth multiplier applied to the smoothed daily trend.
pub fn sentiment_multiplier(popularity: f64, sentiment: f64, trend_1y: f64) -> f64 {
    let popularity_factor = (popularity / 100.0) * 0.15;
    let sentiment_factor = ((sentiment - 50.0) / 50.0) * 0.10;
    let momentum_factor = if trend_1y > 20.0 {
        0.10
    } else if trend_1y > 5.0 {
        0.05
    } else if trend_1y < -10.0 {
        -0.10
    } else {
        0.0
    };
    (1.0 + popularity_factor + sentiment_factor + momentum_factor)
        .clamp(SENTIMENT_MULT_MIN, SENTIMENT_MULT_MAX)
}

/// Closed-form long-horizon estimate from the feature vector alone.
///
/// Builds an annual growth rate in percent from additive feature boosts,
/// decays the rate (not the compounded value) by `rate_decay^(years-1)`
/// to model moderating expectations, then compounds.
pub fn feature_growth_price(features: &ResolvedFeatures, years_ahead: u32, cfg: &GrowthConfig) -> f64 {
    let mut growth = cfg.base_annual_pct;
    growth += (features.rarity_score / 10.0) * cfg.rarity_weight;
    growth += (features.popularity_score / 100.0) * cfg.popularity_weight;
    growth += (features.artist_score / 10.0) * cfg.artist_weight;
    growth += momentum_boost(features.trend_1y);
    growth += ((features.market_sentiment - 50.0) / 50.0) * cfg.sentiment_weight;
    growth += (features.volatility * 2.0).min(cfg.volatility_boost_cap);

    let decay = cfg.rate_decay.powi(years_ahead.saturating_sub(1) as i32);
    let multiplier = (1.0 + growth * decay / 100.0).powi(years_ahead as i32);
    features.current_price * multiplier
}

fn momentum_boost(trend_1y: f64) -> f64 {
    if trend_1y > 20.0 {
        6.0
    } else if trend_1y > 10.0 {
        4.0
    } else if trend_1y > 0.0 {
        2.0
    } else if trend_1y > -10.0 {
        0.0
    } else {
        -3.0
    }
}
