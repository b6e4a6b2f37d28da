/// Trading-day annualization factor. Carried over from equity modeling
/// even though collectibles trade irregularly; an intentional
/// simplification shared with the upstream feature pipeline.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized standard deviation of simple returns. Entries with a
/// non-positive predecessor are skipped so bad upstream data cannot
/// produce a division by zero.
pub fn annualized(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }
    let mut returns = Vec::with_capacity(prices.len() - 1);
    for pair in prices.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev > 0.0 {
            returns.push((next - prev) / prev);
        }
    }
    if returns.len() < 2 {
        return 0.0;
    }
    stddev(&returns) * TRADING_DAYS_PER_YEAR.sqrt()
}

fn stddev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    var.max(0.0).sqrt()
}
