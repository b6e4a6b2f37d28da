use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::model::prediction::RiskLevel;

/// Terminal-price distribution of one Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationSummary {
    pub mean: f64,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

/// Simulate `n_paths` independent geometric-Brownian-motion paths and
/// summarize the terminal prices.
///
/// Each path owns an RNG derived from `seed` and its path index, so the
/// result is reproducible for a fixed seed no matter how rayon schedules
/// the paths, and concurrent calls never contend on a shared generator.
pub fn run(
    current_price: f64,
    daily_trend: f64,
    annual_volatility: f64,
    years_ahead: u32,
    seed: u64,
    cfg: &SimulationConfig,
) -> SimulationSummary {
    if current_price <= f64::EPSILON || cfg.n_paths == 0 || years_ahead == 0 {
        return SimulationSummary::default();
    }

    let steps = cfg.steps_per_year * years_ahead as usize;
    let annual_trend = (daily_trend / current_price * cfg.steps_per_year as f64)
        .clamp(cfg.annual_drift_floor, cfg.annual_drift_cap);
    let drift = annual_trend / cfg.steps_per_year as f64;
    let diffusion = annual_volatility.max(0.0) / (cfg.steps_per_year as f64).sqrt();
    // Hard per-step cap: keeps a run of extreme shocks from compounding
    // into a numeric blow-up.
    let max_price = current_price * cfg.cap_growth_base.powi(years_ahead as i32);

    tracing::trace!(
        n_paths = cfg.n_paths,
        steps,
        drift,
        diffusion,
        "running gbm simulation"
    );

    let mut terminals: Vec<f64> = (0..cfg.n_paths)
        .into_par_iter()
        .map(|path| {
            let mut rng = path_rng(seed, path);
            let mut price = current_price;
            for _ in 0..steps {
                let shock: f64 = rng.sample(StandardNormal);
                price = (price * (drift + diffusion * shock).exp()).min(max_price);
            }
            price
        })
        .collect();

    terminals.sort_by(|a, b| a.total_cmp(b));
    let mean = terminals.iter().sum::<f64>() / terminals.len() as f64;

    SimulationSummary {
        mean,
        p10: percentile(&terminals, 10.0),
        p25: percentile(&terminals, 25.0),
        p50: percentile(&terminals, 50.0),
        p75: percentile(&terminals, 75.0),
        p90: percentile(&terminals, 90.0),
    }
}

/// Classify risk from the simulated downside fraction
/// `(current - p10) / current`.
pub fn classify_risk(downside_frac: f64, cfg: &SimulationConfig) -> RiskLevel {
    if downside_frac > cfg.high_risk_downside {
        RiskLevel::High
    } else if downside_frac > cfg.moderate_risk_downside {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

fn path_rng(seed: u64, path: usize) -> StdRng {
    // SplitMix-style stream separation so paths never overlap.
    StdRng::seed_from_u64(seed ^ (path as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Linearly interpolated percentile over a sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_linearly() {
        let v = vec![10.0, 20.0, 30.0, 40.0];
        assert!((percentile(&v, 0.0) - 10.0).abs() < 1e-12);
        assert!((percentile(&v, 100.0) - 40.0).abs() < 1e-12);
        assert!((percentile(&v, 50.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn zero_price_short_circuits() {
        let s = run(0.0, 0.1, 0.2, 3, 7, &SimulationConfig::default());
        assert_eq!(s, SimulationSummary::default());
    }

    #[test]
    fn risk_bands_match_thresholds() {
        let cfg = SimulationConfig::default();
        assert_eq!(classify_risk(0.31, &cfg), RiskLevel::High);
        assert_eq!(classify_risk(0.30, &cfg), RiskLevel::Moderate);
        assert_eq!(classify_risk(0.16, &cfg), RiskLevel::Moderate);
        assert_eq!(classify_risk(0.15, &cfg), RiskLevel::Low);
        assert_eq!(classify_risk(-0.2, &cfg), RiskLevel::Low);
    }
}
