/// Result of running Holt double exponential smoothing over a series.
///
/// `trend` is in price units per observation interval; callers feed the
/// smoother daily-cadence data, so downstream code reads it as per day.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltOutput {
    pub smoothed: Vec<f64>,
    pub level: f64,
    pub trend: f64,
}

/// Holt's method: level update `α·x + (1-α)·(level+trend)`, trend update
/// `β·Δlevel + (1-β)·trend`. Fewer than two points carry no trend
/// information, so the series is returned as-is with a zero trend.
pub fn smooth(prices: &[f64], alpha: f64, beta: f64) -> HoltOutput {
    if prices.len() < 2 {
        return HoltOutput {
            smoothed: prices.to_vec(),
            level: prices.last().copied().unwrap_or(0.0),
            trend: 0.0,
        };
    }

    let mut level = prices[0];
    let mut trend = prices[1] - prices[0];
    let mut smoothed = Vec::with_capacity(prices.len());
    smoothed.push(level);

    for &price in &prices[1..] {
        let last_level = level;
        level = alpha * price + (1.0 - alpha) * (level + trend);
        trend = beta * (level - last_level) + (1.0 - beta) * trend;
        smoothed.push(level);
    }

    HoltOutput {
        smoothed,
        level,
        trend,
    }
}
