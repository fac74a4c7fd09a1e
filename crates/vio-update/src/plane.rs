use nalgebra::Matrix2x3;
use vio_core::{skew, Mat3, Mat3x6, Real, Vec3};

/// Residual and Jacobian of the horizontal-plane constraint.
///
/// `g_r_o` and `g_p_o` are the orientation and position of the body frame `O`
/// in the global frame `G`. The constraint says the body sits level on the
/// reference plane at height zero: the first two residual components are the
/// horizontal part of the body z-axis in the global frame, the third is the
/// body origin's height.
///
/// The `3 x 6` Jacobian is taken with respect to a local `(δθ, δp)`
/// perturbation, `G_R_O·exp(skew(δθ))` and `G_p_O + δp`, with the sign
/// convention `res(x ⊕ δ) ≈ res(x) − H·δ` so the residual feeds
/// [`crate::ekf_update`] directly (no nuisance parameter, no projection
/// needed).
pub fn plane_constraint_residual_jacobian(g_r_o: &Mat3, g_p_o: &Vec3) -> (Vec3, Mat3x6) {
    // Reference plane: identity orientation, height zero.
    let lambda = Matrix2x3::<Real>::new(
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0,
    );
    let e3 = Vec3::z();

    let horizontal = -lambda * g_r_o * e3;
    let res = Vec3::new(horizontal.x, horizontal.y, e3.dot(g_p_o));

    let mut h = Mat3x6::zeros();
    h.fixed_view_mut::<2, 3>(0, 0)
        .copy_from(&(-lambda * g_r_o * skew(&e3)));
    h.fixed_view_mut::<1, 3>(2, 3).copy_from(&(-e3.transpose()));

    (res, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Vector6};

    #[test]
    fn level_body_on_plane_has_zero_residual() {
        let (res, _) = plane_constraint_residual_jacobian(&Mat3::identity(), &Vec3::zeros());
        assert_eq!(res, Vec3::zeros());
    }

    #[test]
    fn residual_reflects_tilt_and_height() {
        let rot = Rotation3::from_scaled_axis(Vec3::new(0.1, 0.0, 0.0));
        let p = Vec3::new(3.0, -2.0, 0.25);
        let (res, _) = plane_constraint_residual_jacobian(rot.matrix(), &p);
        // A roll about x tilts the body z-axis toward -y.
        assert!(res.x.abs() < 1e-12);
        assert!((res.y - 0.1_f64.sin()).abs() < 1e-12);
        assert!((res.z - 0.25).abs() < 1e-12);
    }

    #[test]
    fn jacobian_matches_finite_differences() {
        let rot = Rotation3::from_scaled_axis(Vec3::new(0.2, -0.1, 0.3));
        let g_r_o = *rot.matrix();
        let g_p_o = Vec3::new(0.4, -1.1, 0.6);
        let (_, h) = plane_constraint_residual_jacobian(&g_r_o, &g_p_o);

        let eps = 1e-6;
        let mut h_num = Mat3x6::zeros();
        for j in 0..6 {
            let mut delta = Vector6::<Real>::zeros();
            delta[j] = eps;
            let perturb = |sign: Real| {
                let d = delta * sign;
                let dr = Rotation3::from_scaled_axis(Vec3::new(d[0], d[1], d[2]));
                let r = g_r_o * dr.matrix();
                let p = g_p_o + Vec3::new(d[3], d[4], d[5]);
                plane_constraint_residual_jacobian(&r, &p).0
            };
            // res(x ⊕ δ) ≈ res(x) − H·δ, so -central difference gives H.
            let col = -(perturb(1.0) - perturb(-1.0)) / (2.0 * eps);
            h_num.set_column(j, &col);
        }

        let err = (h - h_num).norm();
        assert!(err < 1e-8, "analytic vs numeric Jacobian differ by {}", err);
    }
}
