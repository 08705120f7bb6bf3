/// Convenience result type for engine construction.
pub type RippleResult<T> = Result<T, ConfigError>;

/// Rejected configuration. Raised once, at construction; the running engine
/// has no error paths.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_ripples must be at least 1")]
    ZeroCapacity,

    #[error("{field} must be a finite value > 0 (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite and >= 0 (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("breath_depth must lie in [0, 1] (got {0})")]
    BreathDepth(f32),

    #[error("spawn_margin must lie in [0, 0.5) (got {0})")]
    SpawnMargin(f32),
}
