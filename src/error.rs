use thiserror::Error;

/// Top-level error type for the geosugar toolkit.
#[derive(Debug, Error)]
pub enum GeosugarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No curve continues the chain after the curve at `index`.
    #[error("non-contiguous input curves: nothing connects to the end of curve {index}")]
    NonContiguous { index: usize },

    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// Errors raised at the boundary with the host geometry model.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid element: {0}")]
    InvalidElement(String),
}

/// Convenience type alias for results using [`GeosugarError`].
pub type Result<T> = std::result::Result<T, GeosugarError>;
