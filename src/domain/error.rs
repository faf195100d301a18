use thiserror::Error;

/// Errors raised by the simulation engine lifecycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("engine called before a successful initialize")]
    NotInitialized,

    #[error("engine called after release")]
    UseAfterFree,
}
