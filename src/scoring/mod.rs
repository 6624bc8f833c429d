pub mod network;

use crate::analysis::encoder::FeatureVector;
use crate::error::AppError;

pub use network::DenseNetwork;

/// Turns an encoded draft into the probability that "my team" wins.
///
/// Implementations must be read-only: `score` may be called concurrently
/// through a shared reference.
pub trait Scorer: Send + Sync {
    /// Feature width the backend was trained on.
    fn input_width(&self) -> usize;

    /// Win probability in `[0, 1]`. Fails with `ShapeMismatch` when
    /// `features.len() != self.input_width()`.
    fn score(&self, features: &FeatureVector) -> Result<f64, AppError>;
}

pub fn check_width(expected: usize, features: &FeatureVector) -> Result<(), AppError> {
    if features.len() != expected {
        return Err(AppError::ShapeMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn input_width(&self) -> usize {
        (**self).input_width()
    }

    fn score(&self, features: &FeatureVector) -> Result<f64, AppError> {
        (**self).score(features)
    }
}
