use vio_core::{Matd, Vecd};

use crate::UpdateError;

/// Compress a tall measurement system `(H, r)` to an equivalent square one.
///
/// If `H` (`m x n`) has no more rows than columns it is already minimal and
/// is returned unchanged. Otherwise the QR factorization `H = Q·R` gives the
/// `n x n` upper-triangular `R` as the compressed Jacobian and the first `n`
/// rows of `Qᵗ·r` as the compressed residual; the remaining `m - n` rows lie
/// outside `H`'s column space and carry no information about the state.
///
/// Downstream cost is cubic in row count, so this bounds the update cost
/// independently of how many raw scalar measurements were stacked.
pub fn compress_measurement(h: &Matd, r: &Vecd) -> Result<(Matd, Vecd), UpdateError> {
    let (m, n) = h.shape();
    if r.len() != m {
        return Err(UpdateError::ResidualRows {
            expected: m,
            got: r.len(),
        });
    }
    if m <= n {
        return Ok((h.clone(), r.clone()));
    }

    let qr = h.clone().qr();
    let mut qt_r = r.clone();
    qr.q_tr_mul(&mut qt_r);

    Ok((qr.r(), qt_r.rows(0, n).into_owned()))
}
