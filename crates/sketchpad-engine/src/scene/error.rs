/// Rejected shape parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("circle needs at least 3 segments, got {0}")]
    TooFewSegments(u32),
    #[error("shape size must be positive and finite, got {0}")]
    NonPositiveSize(f32),
}

/// Validates a shape size.
pub(crate) fn check_size(size: f32) -> Result<f32, ShapeError> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(ShapeError::NonPositiveSize(size))
    }
}
