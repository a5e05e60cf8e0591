use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("configuration error: obstacle {index} has invalid geometry ({reason})")]
    InvalidObstacle {
        index:  usize,
        reason: &'static str,
    },

    #[error("configuration error: avoidance margin must be finite and non-negative (got {0})")]
    InvalidMargin(f64),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
