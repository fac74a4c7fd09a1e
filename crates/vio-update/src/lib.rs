//! MSCKF-style EKF measurement update.
//!
//! A measurement model produces a residual and a Jacobian with respect to the
//! filter's error-state. This crate reduces that pair to an equivalent
//! lower-dimensional system and fuses it into the state:
//!
//! 1. [`left_nullspace_project`] — remove the dependency on a 3D nuisance
//!    parameter (e.g. a landmark's global position),
//! 2. [`compress_measurement`] — shrink a tall system to a square one,
//! 3. [`ekf_update`] — Kalman gain, manifold retraction, Joseph-form
//!    covariance update.
//!
//! Steps 1 and 2 are optional; a model with no nuisance parameter (such as
//! the [`plane`] constraint) feeds the updater directly.

use thiserror::Error;

/// Left nullspace projection of a feature measurement.
pub mod nullspace;
/// Measurement compression via QR.
pub mod compress;
/// EKF update and covariance conditioning.
pub mod ekf;
/// Plane-constraint measurement model.
pub mod plane;

pub use compress::*;
pub use ekf::*;
pub use nullspace::*;
pub use plane::*;

/// Errors reported by the update pipeline.
///
/// Shape errors are contract violations detected before any state mutation;
/// [`UpdateError::InnovationNotPositiveDefinite`] signals an ill-conditioned
/// or degenerate measurement that the caller should discard.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UpdateError {
    /// Feature Jacobian is not `m x 3` with `m >= 4`.
    #[error("feature Jacobian must be m x 3 with m >= 4, got {rows} x {cols}")]
    FeatureJacobianShape { rows: usize, cols: usize },
    /// Jacobian row count disagrees with the rest of the system.
    #[error("jacobian has {got} rows, expected {expected}")]
    JacobianRows { expected: usize, got: usize },
    /// Residual length disagrees with the Jacobian row count.
    #[error("residual has {got} rows, expected {expected}")]
    ResidualRows { expected: usize, got: usize },
    /// Measurement noise covariance is not square of the residual dimension.
    #[error("noise covariance must be {expected} x {expected}, got {rows} x {cols}")]
    NoiseShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    /// State covariance is not square of the Jacobian column count.
    #[error("state covariance must be {expected} x {expected}, got {rows} x {cols}")]
    CovarianceShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    /// Cholesky factorization of the innovation covariance failed. The state
    /// is left untouched; retrying with the same inputs cannot succeed.
    #[error("innovation covariance is not positive definite")]
    InnovationNotPositiveDefinite,
}
