use crate::math::{Matd, Vecd};

/// Contract between the EKF updater and a concrete filter state.
///
/// The updater only ever touches the state through this trait: it reads the
/// prior error-state covariance, applies a correction to the mean, and writes
/// the posterior covariance back. How the mean is parameterized (quaternion,
/// rotation matrix, Lie algebra) is the implementor's business.
pub trait ErrorState {
    /// Error-state covariance. Square, symmetric, positive semi-definite;
    /// its dimension is the total error-state size.
    fn covariance(&self) -> &Matd;

    fn covariance_mut(&mut self) -> &mut Matd;

    /// Apply an error-state correction to the mean estimate as a manifold
    /// retraction. `delta_x` has the covariance dimension.
    ///
    /// Implementations must not modify the covariance here; the updater owns
    /// the covariance write.
    fn apply_correction(&mut self, delta_x: &Vecd);
}
