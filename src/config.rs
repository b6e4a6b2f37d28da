use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Tunable constants for every stage of the hybrid pipeline.
///
/// The numeric defaults are the production values; they were chosen
/// empirically, not derived, so treat them as policy rather than math.
/// Every field has a serde default, so a partial TOML override file works.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub smoothing: SmoothingConfig,
    pub simulation: SimulationConfig,
    pub blend: BlendConfig,
    pub growth: GrowthConfig,
    pub timeline: TimelineConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Holt level-smoothing factor.
    pub level_alpha: f64,
    /// Holt trend-smoothing factor.
    pub trend_beta: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            level_alpha: 0.2,
            trend_beta: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent GBM paths per call.
    pub n_paths: usize,
    /// Steps per simulated year (calendar-day convention).
    pub steps_per_year: usize,
    /// Annualized drift is clamped to this band before simulation.
    pub annual_drift_floor: f64,
    pub annual_drift_cap: f64,
    /// Per-step price cap is current_price * cap_growth_base^years.
    pub cap_growth_base: f64,
    /// The smoothed daily trend is clamped to this fraction of the
    /// reference price before it enters the simulator.
    pub max_daily_trend_frac: f64,
    /// Downside fraction thresholds for risk classification.
    pub high_risk_downside: f64,
    pub moderate_risk_downside: f64,
    /// Window for the volume-weighted reference price.
    pub reference_window: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_paths: 1000,
            steps_per_year: 365,
            annual_drift_floor: -0.5,
            annual_drift_cap: 0.3,
            cap_growth_base: 1.5,
            max_daily_trend_frac: 0.001,
            high_risk_downside: 0.30,
            moderate_risk_downside: 0.15,
            reference_window: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// History depth at which the time-series leg earns the richer weight.
    pub rich_history_len: usize,
    /// Time-series weight with >= rich_history_len observations; the
    /// feature leg gets the complement.
    pub ts_weight_rich: f64,
    pub ts_weight_sparse: f64,
    /// Feature-estimate scaling applied before blending the conservative
    /// and aggressive scenarios, per history depth.
    pub conservative_feature_scale_rich: f64,
    pub aggressive_feature_scale_rich: f64,
    pub conservative_feature_scale_sparse: f64,
    pub aggressive_feature_scale_sparse: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            rich_history_len: 12,
            ts_weight_rich: 0.75,
            ts_weight_sparse: 0.5,
            conservative_feature_scale_rich: 0.8,
            aggressive_feature_scale_rich: 1.2,
            conservative_feature_scale_sparse: 0.85,
            aggressive_feature_scale_sparse: 1.15,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Base annual growth rate in percent before feature boosts.
    pub base_annual_pct: f64,
    pub rarity_weight: f64,
    pub popularity_weight: f64,
    pub artist_weight: f64,
    pub sentiment_weight: f64,
    /// Volatility boost is min(volatility * 2, cap).
    pub volatility_boost_cap: f64,
    /// Per-year decay applied to the growth rate, not the compounded value.
    pub rate_decay: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base_annual_pct: 6.0,
            rarity_weight: 3.5,
            popularity_weight: 5.0,
            artist_weight: 2.0,
            sentiment_weight: 4.0,
            volatility_boost_cap: 2.0,
            rate_decay: 0.95,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub max_years: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { max_years: 5 }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse engine config TOML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_constants() {
        let cfg = EngineConfig::default();
        assert!((cfg.smoothing.level_alpha - 0.2).abs() < f64::EPSILON);
        assert!((cfg.smoothing.trend_beta - 0.05).abs() < f64::EPSILON);
        assert_eq!(cfg.simulation.n_paths, 1000);
        assert_eq!(cfg.blend.rich_history_len, 12);
        assert!((cfg.blend.ts_weight_rich - 0.75).abs() < f64::EPSILON);
        assert!((cfg.growth.rate_decay - 0.95).abs() < f64::EPSILON);
        assert_eq!(cfg.timeline.max_years, 5);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = EngineConfig::from_toml_str(
            r#"
[simulation]
n_paths = 250

[timeline]
max_years = 3
"#,
        )
        .unwrap();
        assert_eq!(cfg.simulation.n_paths, 250);
        assert_eq!(cfg.timeline.max_years, 3);
        assert!((cfg.smoothing.level_alpha - 0.2).abs() < f64::EPSILON);
        assert!((cfg.blend.ts_weight_sparse - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(EngineConfig::from_toml_str("simulation = 3").is_err());
    }
}
