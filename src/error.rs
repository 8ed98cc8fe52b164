use thiserror::Error;

/// Top-level error type for the stipple engine.
#[derive(Debug, Error)]
pub enum StippleError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors raised when constructing a shape from structurally invalid
/// input. Continuous parameters (radius, height, density) are clamped
/// at the mutator boundary instead and never produce an error.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("polygon needs at least {min} vertices, got {got}")]
    TooFewVertices { min: usize, got: usize },

    #[error("star needs at least {min} spikes, got {got}")]
    TooFewSpikes { min: usize, got: usize },

    #[error("bezier curve needs at least {min} control points, got {got}")]
    TooFewControlPoints { min: usize, got: usize },

    #[error("composite shape needs at least one child")]
    EmptyComposite,
}

/// Convenience type alias for results using [`StippleError`].
pub type Result<T> = std::result::Result<T, StippleError>;
