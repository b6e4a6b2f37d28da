use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observed market price for an item.
///
/// Observations may arrive in arbitrary order; the series preparer sorts
/// them before use. Volume is optional because most marketplaces only
/// expose it for a subset of listings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: Option<u64>,
}

impl PriceObservation {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self {
            timestamp,
            price,
            volume: None,
        }
    }

    pub fn with_volume(timestamp: DateTime<Utc>, price: f64, volume: u64) -> Self {
        Self {
            timestamp,
            price,
            volume: Some(volume),
        }
    }
}
