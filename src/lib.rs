//! Hybrid forecasting and investment-scoring engine for collectible market
//! prices.
//!
//! The engine consumes a sparse history of observed prices plus a static
//! feature vector (rarity, popularity, artist reputation, momentum, market
//! sentiment) and produces a full risk picture for an arbitrary horizon in
//! whole years: a point estimate, a confidence band, three named scenarios,
//! a risk classification, and a discrete recommendation.
//!
//! Everything here is a pure function of its explicit inputs except the
//! Monte Carlo random draws, which are owned per call. There is no shared
//! mutable state, no I/O, and no wire protocol; persistence and data
//! acquisition belong to external collaborators.

pub mod config;
pub mod engine;
pub mod error;
pub mod growth;
pub mod indicator;
pub mod model;
pub mod scoring;
pub mod series;
pub mod simulation;

pub use config::EngineConfig;
pub use engine::{PredictionEngine, TimeSeriesForecast};
pub use error::EngineError;
pub use model::features::FeatureVector;
pub use model::observation::PriceObservation;
pub use model::prediction::{
    PredictionResult, Recommendation, RiskAssessment, RiskLevel, Scenarios, TimelinePoint,
};
pub use model::rating::{InvestmentRating, RatingLabel};
pub use scoring::score;
