use nalgebra::{DMatrix, DVector, Matrix3, Matrix3x6, Vector3};

pub type Real = f64;

pub type Vec3 = Vector3<Real>;
pub type Mat3 = Matrix3<Real>;
pub type Mat3x6 = Matrix3x6<Real>;

/// Dynamically-sized matrix/vector used throughout the update pipeline,
/// where dimensions depend on the sliding-window size and measurement count.
pub type Matd = DMatrix<Real>;
pub type Vecd = DVector<Real>;

/// Skew-symmetric cross-product matrix: `skew(a) * b == a.cross(&b)`.
pub fn skew(v: &Vec3) -> Mat3 {
    Mat3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}
