use thiserror::Error;

/// The engine recovers locally from sparse or degenerate numeric input, so
/// for valid-shaped data the only failure a caller can see is a contract
/// violation on the requested horizon.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("years_ahead must be at least 1, got {0}")]
    InvalidHorizon(u32),
}
