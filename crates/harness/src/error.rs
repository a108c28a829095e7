use distance::{DistanceError, Variant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error(transparent)]
    Distance(#[from] DistanceError),
    #[error(
        "{first} and {second} disagree by {max_abs_diff:e} on the strict lower triangle (tolerance {tolerance:e})"
    )]
    ToleranceViolation {
        first: Variant,
        second: Variant,
        max_abs_diff: f64,
        tolerance: f64,
    },
    #[error("{first} produced a {first_dim:?} matrix but {second} produced {second_dim:?}")]
    MatrixShape {
        first: Variant,
        second: Variant,
        first_dim: (usize, usize),
        second_dim: (usize, usize),
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
