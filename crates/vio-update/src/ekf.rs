use log::debug;
use serde::{Deserialize, Serialize};
use vio_core::{ErrorState, Matd, Real, Vecd};

use crate::UpdateError;

/// Numerical conditioning knobs for the EKF update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateOptions {
    /// Lower bound applied to every covariance diagonal entry after an
    /// update. Keeps the covariance positive definite over long update
    /// sequences where floating-point cancellation would otherwise drive
    /// diagonal entries to zero or below.
    pub min_covariance_diag: Real,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            min_covariance_diag: 1e-12,
        }
    }
}

/// Clamp every diagonal entry of a square matrix to at least `min_value`.
/// Off-diagonal entries are untouched.
pub fn clamp_min_diagonal(mat: &mut Matd, min_value: Real) {
    for i in 0..mat.nrows() {
        if mat[(i, i)] < min_value {
            mat[(i, i)] = min_value;
        }
    }
}

/// Fuse a measurement `(H, r, V)` into the state.
///
/// `H` (`m x n`) maps the error-state to measurement space, `r` is the
/// residual, and `V` the measurement noise covariance. On success the state's
/// mean has been retracted by `K·r` and its covariance replaced by the
/// Joseph-form posterior, symmetrized and diagonal-floored per `options`.
///
/// All dimension checks run before any mutation; a non-positive-definite
/// innovation covariance aborts the update with the state bit-identical to
/// its prior.
pub fn ekf_update<S: ErrorState>(
    h: &Matd,
    r: &Vecd,
    v: &Matd,
    state: &mut S,
    options: &UpdateOptions,
) -> Result<(), UpdateError> {
    let (m, n) = h.shape();
    if r.len() != m {
        return Err(UpdateError::ResidualRows {
            expected: m,
            got: r.len(),
        });
    }
    if v.shape() != (m, m) {
        return Err(UpdateError::NoiseShape {
            expected: m,
            rows: v.nrows(),
            cols: v.ncols(),
        });
    }
    if state.covariance().shape() != (n, n) {
        return Err(UpdateError::CovarianceShape {
            expected: n,
            rows: state.covariance().nrows(),
            cols: state.covariance().ncols(),
        });
    }

    let p_minus = state.covariance().clone();

    // Innovation covariance and its Cholesky factor. A failed factorization
    // means the measurement model or its conditioning is broken upstream.
    let s = h * &p_minus * h.transpose() + v;
    let Some(chol) = s.cholesky() else {
        debug!("rejecting {}-row update: innovation covariance not SPD", m);
        return Err(UpdateError::InnovationNotPositiveDefinite);
    };

    // K = P⁻·Hᵗ·S⁻¹ = (S⁻¹·H·P⁻)ᵗ, using symmetry of P⁻ and S⁻¹.
    let k = chol.solve(&(h * &p_minus)).transpose();
    let delta_x = &k * r;
    state.apply_correction(&delta_x);

    // Joseph form: stays symmetric PSD under rounding even for an inexact K.
    let i_kh = Matd::identity(n, n) - &k * h;
    let mut p_plus = &i_kh * p_minus * i_kh.transpose() + &k * v * k.transpose();
    p_plus.fill_lower_triangle_with_upper_triangle();
    clamp_min_diagonal(&mut p_plus, options.min_covariance_diag);
    *state.covariance_mut() = p_plus;

    Ok(())
}
