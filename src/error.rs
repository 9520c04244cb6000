use thiserror::Error;

/// Top-level error type for bowsight.
#[derive(Debug, Error)]
pub enum BowsightError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors related to operations built on top of the geometry.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`BowsightError`].
pub type Result<T> = std::result::Result<T, BowsightError>;
