use std::path::PathBuf;

/// Common error type for table construction, estimation, and configuration.
#[derive(thiserror::Error, Debug)]
pub enum EstimatorError {
    #[error("at least one integration time is required")]
    EmptyIntegrationTimes,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("cannot convert {from} to {to}")]
    UnitMismatch { from: String, to: String },
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("column {name} has {actual} rows, table has {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("reading telescope config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing telescope config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// Rejects non-finite or non-positive scalars with a named diagnostic.
pub(crate) fn require_positive(what: &str, value: f64) -> EstimatorResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EstimatorError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            what, value
        )))
    }
}
