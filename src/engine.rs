use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::growth;
use crate::indicator::{holt, volatility};
use crate::model::features::{FeatureVector, ResolvedFeatures};
use crate::model::observation::PriceObservation;
use crate::model::prediction::{
    MarketFactors, PredictionResult, Recommendation, RiskAssessment, RiskLevel, Scenarios,
    TimelinePoint,
};
use crate::model::rating::InvestmentRating;
use crate::scoring;
use crate::series::{self, PreparedSeries};
use crate::simulation;

/// Output of the time-series leg: smoothed trend plus the Monte Carlo
/// distribution, before blending with the feature growth model.
///
/// `daily_trend` is the raw smoothed trend; the sentiment-adjusted and
/// clamped value only feeds the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesForecast {
    pub base: f64,
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
    pub risk_level: RiskLevel,
    pub volatility: f64,
    pub downside_risk_pct: f64,
    pub upside_potential_pct: f64,
    pub sentiment_multiplier: f64,
    pub daily_trend: f64,
}

/// Stateless hybrid forecasting engine. Freely instantiable; safe to call
/// from any number of threads because every invocation owns its inputs
/// and its random stream.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    cfg: EngineConfig,
}

impl PredictionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: EngineConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Hybrid prediction with a fresh random seed per call.
    pub fn predict(
        &self,
        history: &[PriceObservation],
        features: &FeatureVector,
        years_ahead: u32,
    ) -> Result<PredictionResult, EngineError> {
        self.predict_seeded(history, features, years_ahead, rand::random())
    }

    /// Deterministic variant: a fixed seed reproduces the percentile
    /// outputs exactly.
    pub fn predict_seeded(
        &self,
        history: &[PriceObservation],
        features: &FeatureVector,
        years_ahead: u32,
        seed: u64,
    ) -> Result<PredictionResult, EngineError> {
        if years_ahead == 0 {
            return Err(EngineError::InvalidHorizon(years_ahead));
        }
        let resolved = features.resolve();
        let prepared = series::prepare(history);

        tracing::debug!(
            n_obs = history.len(),
            years_ahead,
            seed,
            "running hybrid prediction"
        );

        let ts = self.forecast_series(prepared.as_ref(), &resolved, years_ahead, seed);
        let feature_price = growth::feature_growth_price(&resolved, years_ahead, &self.cfg.growth);

        let blend = &self.cfg.blend;
        let rich = history.len() >= blend.rich_history_len;
        let (w_ts, cons_scale, aggr_scale) = if rich {
            (
                blend.ts_weight_rich,
                blend.conservative_feature_scale_rich,
                blend.aggressive_feature_scale_rich,
            )
        } else {
            (
                blend.ts_weight_sparse,
                blend.conservative_feature_scale_sparse,
                blend.aggressive_feature_scale_sparse,
            )
        };
        let w_feat = 1.0 - w_ts;

        let moderate = ts.moderate * w_ts + feature_price * w_feat;
        let conservative = ts.conservative * w_ts + feature_price * cons_scale * w_feat;
        let aggressive = ts.aggressive * w_ts + feature_price * aggr_scale * w_feat;

        let reward_risk = ts.upside_potential_pct / ts.downside_risk_pct.max(1.0);
        let recommendation = recommend(reward_risk, ts.risk_level);
        let target_date = Utc::now() + Duration::days(365 * i64::from(years_ahead));

        Ok(PredictionResult {
            predicted_price: round2(moderate),
            confidence_lower: round2(ts.confidence_lower),
            confidence_upper: round2(ts.confidence_upper),
            scenarios: Scenarios {
                conservative: round2(conservative),
                moderate: round2(moderate),
                aggressive: round2(aggressive),
            },
            risk_assessment: RiskAssessment {
                risk_level: ts.risk_level,
                volatility: round3(ts.volatility),
                downside_risk_pct: round2(ts.downside_risk_pct),
                upside_potential_pct: round2(ts.upside_potential_pct),
                reward_risk_ratio: round2(reward_risk),
            },
            market_factors: MarketFactors {
                sentiment_multiplier: round3(ts.sentiment_multiplier),
                popularity_score: resolved.popularity_score,
                market_sentiment: resolved.market_sentiment,
                current_trend: round2(ts.daily_trend),
            },
            target_date,
            years_ahead,
            recommendation,
            time_series_component: round2(ts.moderate),
            feature_component: round2(feature_price),
        })
    }

    /// One prediction per integer year from 1 to the configured maximum,
    /// trimmed to the summary fields needed for charting. No state is
    /// carried between years.
    pub fn timeline(
        &self,
        history: &[PriceObservation],
        features: &FeatureVector,
    ) -> Result<Vec<TimelinePoint>, EngineError> {
        self.timeline_to(history, features, self.cfg.timeline.max_years)
    }

    pub fn timeline_to(
        &self,
        history: &[PriceObservation],
        features: &FeatureVector,
        max_years: u32,
    ) -> Result<Vec<TimelinePoint>, EngineError> {
        let mut points = Vec::with_capacity(max_years as usize);
        for year in 1..=max_years {
            let p = self.predict(history, features, year)?;
            points.push(TimelinePoint::from(&p));
        }
        Ok(points)
    }

    /// Time-series leg on its own: smoothing, volatility, sentiment
    /// adjustment, and the Monte Carlo distribution.
    pub fn forecast_time_series(
        &self,
        history: &[PriceObservation],
        features: &FeatureVector,
        years_ahead: u32,
        seed: u64,
    ) -> TimeSeriesForecast {
        let resolved = features.resolve();
        let prepared = series::prepare(history);
        self.forecast_series(prepared.as_ref(), &resolved, years_ahead, seed)
    }

    /// Companion scorer over the same feature vector.
    pub fn score(&self, features: &FeatureVector) -> InvestmentRating {
        scoring::score(features)
    }

    fn forecast_series(
        &self,
        prepared: Option<&PreparedSeries>,
        features: &ResolvedFeatures,
        years_ahead: u32,
        seed: u64,
    ) -> TimeSeriesForecast {
        let Some(series) = prepared.filter(|s| s.len() >= 2) else {
            let price = prepared
                .map(|s| s.last_price())
                .filter(|p| *p > 0.0)
                .unwrap_or(features.current_price);
            return insufficient_data_forecast(price);
        };

        let sim_cfg = &self.cfg.simulation;
        let smoothed = holt::smooth(
            &series.prices,
            self.cfg.smoothing.level_alpha,
            self.cfg.smoothing.trend_beta,
        );
        let vol = volatility::annualized(&series.prices);
        let reference = series.reference_price(sim_cfg.reference_window);
        if reference <= f64::EPSILON {
            // All-zero history carries no usable signal.
            return insufficient_data_forecast(features.current_price);
        }

        let multiplier = growth::sentiment_multiplier(
            features.popularity_score,
            features.market_sentiment,
            features.trend_1y,
        );
        // Bound the sentiment-scaled trend to +-0.1% of the reference
        // price per day, which keeps annualized drift near +-36%.
        let max_daily = reference * sim_cfg.max_daily_trend_frac;
        let adjusted_trend = (smoothed.trend * multiplier).clamp(-max_daily, max_daily);

        let sim = simulation::run(reference, adjusted_trend, vol, years_ahead, seed, sim_cfg);
        let downside = (reference - sim.p10) / reference;
        let upside = (sim.p90 - reference) / reference;

        TimeSeriesForecast {
            base: sim.mean,
            conservative: sim.p25,
            moderate: sim.p50,
            aggressive: sim.p75,
            confidence_lower: sim.p10,
            confidence_upper: sim.p90,
            risk_level: simulation::classify_risk(downside, sim_cfg),
            volatility: vol,
            downside_risk_pct: downside * 100.0,
            upside_potential_pct: upside * 100.0,
            sentiment_multiplier: multiplier,
            daily_trend: smoothed.trend,
        }
    }
}

/// Wide-band single-point forecast used when the history cannot support
/// smoothing. Never raised to the caller as an error.
fn insufficient_data_forecast(price: f64) -> TimeSeriesForecast {
    TimeSeriesForecast {
        base: price,
        conservative: price * 0.8,
        moderate: price,
        aggressive: price * 1.3,
        confidence_lower: price * 0.6,
        confidence_upper: price * 1.5,
        risk_level: RiskLevel::High,
        volatility: 0.0,
        downside_risk_pct: 20.0,
        upside_potential_pct: 50.0,
        sentiment_multiplier: 1.0,
        daily_trend: 0.0,
    }
}

/// Deterministic decision table over the reward/risk ratio. The
/// thresholds are policy, not statistics; reproduce them exactly.
fn recommend(reward_risk: f64, risk: RiskLevel) -> Recommendation {
    if reward_risk > 2.5 && risk == RiskLevel::Low {
        Recommendation::StrongBuy
    } else if reward_risk > 1.5 && risk != RiskLevel::High {
        Recommendation::Buy
    } else if reward_risk > 1.0 {
        Recommendation::Hold
    } else if reward_risk > 0.5 {
        Recommendation::ConsiderSelling
    } else {
        Recommendation::Sell
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
