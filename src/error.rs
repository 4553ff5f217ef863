//! Error types for knapsack-ga.
//!
//! Configuration problems are reported before the evolutionary loop starts.
//! Once a run is underway nothing can fail: fitness is a total function and
//! infeasible genomes simply score zero.

use thiserror::Error;

/// Errors returned at the crate boundary.
#[derive(Debug, Error)]
pub enum KnapsackError {
    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The item catalog contains no items.
    #[error("Item catalog is empty")]
    EmptyCatalog,

    /// Capacity must be a finite number greater than zero.
    #[error("Invalid capacity {0}: must be a finite number greater than 0")]
    InvalidCapacity(f64),

    /// Reading a catalog or writing a report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = KnapsackError::InvalidConfig("population_size must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: population_size must be at least 1"
        );
        assert_eq!(
            KnapsackError::EmptyCatalog.to_string(),
            "Item catalog is empty"
        );
        let msg = KnapsackError::InvalidCapacity(-1.0).to_string();
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: KnapsackError = io.into();
        assert!(matches!(err, KnapsackError::Io(_)));
    }
}
