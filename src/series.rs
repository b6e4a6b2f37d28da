use crate::model::observation::PriceObservation;

/// Price history normalized for the numeric pipeline: two parallel arrays
/// sorted by ascending timestamp, with missing volume defaulted to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
}

/// Sort observations chronologically and split them into parallel arrays.
/// Returns `None` on empty input so downstream code takes the explicit
/// insufficient-data path instead of operating on empty arrays.
pub fn prepare(observations: &[PriceObservation]) -> Option<PreparedSeries> {
    if observations.is_empty() {
        return None;
    }
    let mut sorted: Vec<&PriceObservation> = observations.iter().collect();
    sorted.sort_by_key(|o| o.timestamp);

    let mut prices = Vec::with_capacity(sorted.len());
    let mut volumes = Vec::with_capacity(sorted.len());
    for obs in sorted {
        prices.push(obs.price);
        volumes.push(obs.volume.unwrap_or(1) as f64);
    }
    Some(PreparedSeries { prices, volumes })
}

impl PreparedSeries {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn last_price(&self) -> f64 {
        self.prices.last().copied().unwrap_or(0.0)
    }

    /// Volume-weighted mean price over the most recent `window`
    /// observations. Falls back to the last price when the window carries
    /// no volume at all.
    pub fn reference_price(&self, window: usize) -> f64 {
        let n = self.prices.len();
        if n == 0 {
            return 0.0;
        }
        let start = n.saturating_sub(window.max(1));
        let prices = &self.prices[start..];
        let volumes = &self.volumes[start..];
        let total: f64 = volumes.iter().sum();
        if total <= f64::EPSILON {
            return self.last_price();
        }
        let weighted: f64 = prices.iter().zip(volumes).map(|(p, v)| p * v).sum();
        weighted / total
    }
}
