use thiserror::Error;

/// Message for 2-D input that is missing, empty, or not made of pairs.
pub const EXPECTED_COORDS_2D: &str = "Expected nested array coords: [[1, 2], [3, 4], ...]";

/// Message for 3-D input that is missing, empty, or not made of triples.
pub const EXPECTED_COORDS_3D: &str = "Expected nested array coords: [[1, 2, 3], [4, 5, 6], ...]";

/// Top-level error type for the twirl library.
#[derive(Debug, Error)]
pub enum TwirlError {
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by transform operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The point set is missing, empty, or has the wrong dimensionality.
    #[error("{0}")]
    InvalidInput(String),
}

impl OperationError {
    /// Invalid 2-D coordinate input.
    #[must_use]
    pub fn expected_coords_2d() -> Self {
        Self::InvalidInput(EXPECTED_COORDS_2D.into())
    }

    /// Invalid 3-D coordinate input.
    #[must_use]
    pub fn expected_coords_3d() -> Self {
        Self::InvalidInput(EXPECTED_COORDS_3D.into())
    }
}

/// Convenience type alias for results using [`TwirlError`].
pub type Result<T> = std::result::Result<T, TwirlError>;
