use vio_core::{Matd, Vecd};

use crate::UpdateError;

/// Project a feature measurement into the left nullspace of its feature
/// Jacobian, eliminating the 3D feature position from the linear system.
///
/// `hx` (`m x p`) is the Jacobian with respect to the error-state, `hf`
/// (`m x 3`, `m >= 4`) the Jacobian with respect to the feature position, and
/// `res` the `m`-dimensional residual. Returns the `(m - 3) x p` projected
/// Jacobian and `(m - 3)` residual.
///
/// Left-multiplying the system by the orthonormal `Q2ᵗ` (the left nullspace
/// of `hf`) keeps the measurement's information content and keeps isotropic
/// noise white, while the discarded rows carry all dependency on the feature.
pub fn left_nullspace_project(
    hx: &Matd,
    hf: &Matd,
    res: &Vecd,
) -> Result<(Matd, Vecd), UpdateError> {
    let m = hf.nrows();
    if hf.ncols() != 3 || m < 4 {
        return Err(UpdateError::FeatureJacobianShape {
            rows: m,
            cols: hf.ncols(),
        });
    }
    if hx.nrows() != m {
        return Err(UpdateError::JacobianRows {
            expected: m,
            got: hx.nrows(),
        });
    }
    if res.len() != m {
        return Err(UpdateError::ResidualRows {
            expected: m,
            got: res.len(),
        });
    }

    // Householder QR of hf; applying Qᵗ through the stored reflectors avoids
    // materializing the full m x m orthogonal factor. Rows 3.. of Qᵗ·A are
    // exactly Q2ᵗ·A.
    let qr = hf.clone().qr();
    let mut h = hx.clone();
    qr.q_tr_mul(&mut h);
    let mut r = res.clone();
    qr.q_tr_mul(&mut r);

    Ok((h.rows(3, m - 3).into_owned(), r.rows(3, m - 3).into_owned()))
}
