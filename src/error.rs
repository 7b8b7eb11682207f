//! Error types for geohash construction and navigation.

use thiserror::Error;

/// Errors produced by the geohash codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeohashError {
    /// A precision outside `[PRECISION_MIN, PRECISION_MAX]` was requested,
    /// either directly or by zooming out past the coarsest level.
    #[error("invalid precision: {0} (expected 1..=26)")]
    InvalidPrecision(u8),
}

pub type Result<T> = std::result::Result<T, GeohashError>;
