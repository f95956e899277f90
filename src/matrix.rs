use std::ops::{Add, Mul};

use crate::{vec3::Vec3, vec4::Vec4};

/// Row-major homogeneous matrix.
///
/// Index notation is: i, j - row, column. Products apply right-to-left, so
/// `a * b` transforms by `b` first.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Matrix4x4<T>([Vec4<T>; 4]);

impl<T: Copy> Matrix4x4<T> {
    pub fn new(v: [[T; 4]; 4]) -> Self {
        Matrix4x4([Vec4::from(v[0]), Vec4::from(v[1]), Vec4::from(v[2]), Vec4::from(v[3])])
    }
}

impl Matrix4x4<f64> {
    pub fn identity() -> Self {
        Matrix4x4::new([[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]])
    }

    /// Promotes a linear 3x3 map by padding it with the identity row and column.
    pub fn from_3x3(m: [[f64; 3]; 3]) -> Self {
        Matrix4x4::new([
            [m[0][0], m[0][1], m[0][2], 0.0],
            [m[1][0], m[1][1], m[1][2], 0.0],
            [m[2][0], m[2][1], m[2][2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(v: Vec3<f64>) -> Self {
        Matrix4x4::new([[1.0, 0.0, 0.0, v.x], [0.0, 1.0, 0.0, v.y], [0.0, 0.0, 1.0, v.z], [0.0, 0.0, 0.0, 1.0]])
    }

    /// Rotation by `angle` degrees around the axis through `point` along `axis`,
    /// clockwise when looking along the axis.
    pub fn rotation(point: Vec3<f64>, axis: Vec3<f64>, angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        let k = 1.0 - cos;
        let Vec3 { x, y, z } = axis.unit();

        let rotation = Matrix4x4::new([
            [cos + x * x * k, x * y * k - z * sin, x * z * k + y * sin, 0.0],
            [y * x * k + z * sin, cos + y * y * k, y * z * k - x * sin, 0.0],
            [z * x * k - y * sin, z * y * k + x * sin, cos + z * z * k, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Matrix4x4::translation(point) * rotation * Matrix4x4::translation(-point)
    }

    pub fn scaling(v: Vec3<f64>) -> Self {
        Matrix4x4::new([[v.x, 0.0, 0.0, 0.0], [0.0, v.y, 0.0, 0.0], [0.0, 0.0, v.z, 0.0], [0.0, 0.0, 0.0, 1.0]])
    }

    /// Mirror through the plane containing `point` with the given normal.
    pub fn reflection(point: Vec3<f64>, normal: Vec3<f64>) -> Self {
        let n = normal.unit();
        let d = -n.dot(&point);

        Matrix4x4::new([
            [1.0 - 2.0 * n.x * n.x, -2.0 * n.x * n.y, -2.0 * n.x * n.z, -2.0 * d * n.x],
            [-2.0 * n.x * n.y, 1.0 - 2.0 * n.y * n.y, -2.0 * n.y * n.z, -2.0 * d * n.y],
            [-2.0 * n.x * n.z, -2.0 * n.z * n.y, 1.0 - 2.0 * n.z * n.z, -2.0 * d * n.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn inverse(&self) -> Self {
        let a = &self.0;

        let s0 = a[0][0] * a[1][1] - a[1][0] * a[0][1];
        let s1 = a[0][0] * a[1][2] - a[1][0] * a[0][2];
        let s2 = a[0][0] * a[1][3] - a[1][0] * a[0][3];
        let s3 = a[0][1] * a[1][2] - a[1][1] * a[0][2];
        let s4 = a[0][1] * a[1][3] - a[1][1] * a[0][3];
        let s5 = a[0][2] * a[1][3] - a[1][2] * a[0][3];

        let c5 = a[2][2] * a[3][3] - a[3][2] * a[2][3];
        let c4 = a[2][1] * a[3][3] - a[3][1] * a[2][3];
        let c3 = a[2][1] * a[3][2] - a[3][1] * a[2][2];
        let c2 = a[2][0] * a[3][3] - a[3][0] * a[2][3];
        let c1 = a[2][0] * a[3][2] - a[3][0] * a[2][2];
        let c0 = a[2][0] * a[3][1] - a[3][0] * a[2][1];

        let inv_det = 1.0 / (s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0);

        Matrix4x4::new([
            [
                (a[1][1] * c5 - a[1][2] * c4 + a[1][3] * c3) * inv_det,
                (-a[0][1] * c5 + a[0][2] * c4 - a[0][3] * c3) * inv_det,
                (a[3][1] * s5 - a[3][2] * s4 + a[3][3] * s3) * inv_det,
                (-a[2][1] * s5 + a[2][2] * s4 - a[2][3] * s3) * inv_det,
            ],
            [
                (-a[1][0] * c5 + a[1][2] * c2 - a[1][3] * c1) * inv_det,
                (a[0][0] * c5 - a[0][2] * c2 + a[0][3] * c1) * inv_det,
                (-a[3][0] * s5 + a[3][2] * s2 - a[3][3] * s1) * inv_det,
                (a[2][0] * s5 - a[2][2] * s2 + a[2][3] * s1) * inv_det,
            ],
            [
                (a[1][0] * c4 - a[1][1] * c2 + a[1][3] * c0) * inv_det,
                (-a[0][0] * c4 + a[0][1] * c2 - a[0][3] * c0) * inv_det,
                (a[3][0] * s4 - a[3][1] * s2 + a[3][3] * s0) * inv_det,
                (-a[2][0] * s4 + a[2][1] * s2 - a[2][3] * s0) * inv_det,
            ],
            [
                (-a[1][0] * c3 + a[1][1] * c1 - a[1][2] * c0) * inv_det,
                (a[0][0] * c3 - a[0][1] * c1 + a[0][2] * c0) * inv_det,
                (-a[3][0] * s3 + a[3][1] * s1 - a[3][2] * s0) * inv_det,
                (a[2][0] * s3 - a[2][1] * s1 + a[2][2] * s0) * inv_det,
            ],
        ])
    }
}

impl<'a, T: Copy + Add<Output = T> + Mul<Output = T>> Mul<Vec4<T>> for &'a Matrix4x4<T> {
    type Output = Vec4<T>;

    fn mul(self, vec: Vec4<T>) -> Self::Output {
        let row = |i: usize| {
            let r = &self.0[i];
            r[0] * vec[0] + r[1] * vec[1] + r[2] * vec[2] + r[3] * vec[3]
        };

        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Matrix4x4<f64>> for Matrix4x4<f64> {
    type Output = Matrix4x4<f64>;

    fn mul(self, o: Matrix4x4<f64>) -> Self::Output {
        let mut out = Matrix4x4::<f64>::default();

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    out.0[i][j] += self.0[i][k] * o.0[k][j];
                }
            }
        }

        out
    }
}

#[cfg(test)]
fn assert_close(a: Vec3<f64>, b: Vec3<f64>) {
    assert!((a - b).len() < 1e-9, "{:?} != {:?}", a, b);
}

#[test]
fn mul_matrix_vec() {
    let matrix = &Matrix4x4::new([[1, 0, 0, 10], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]);
    let vec = Vec4::new(10, 10, 10, 1);

    assert_eq!(Vec4::new(20, 10, 10, 1), matrix * vec);
}

#[test]
fn inverse_identity() {
    let i = Matrix4x4::identity();
    assert_eq!(i, i.inverse());
}

#[test]
fn promoted_3x3_keeps_points_translation_free() {
    let m = Matrix4x4::from_3x3([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);

    assert_close(Vec3::new(-2.0, 1.0, 3.0), Vec3::new(1.0, 2.0, 3.0).transform(&m));
    assert_eq!(1.0, (&m * Vec4::from(Vec3::new(1.0, 2.0, 3.0)))[3]);
}

#[test]
fn rotation_pivots_on_point() {
    let pivot = Vec3::new(1.0, 1.0, 0.0);
    let m = Matrix4x4::rotation(pivot, Vec3::new(0.0, 0.0, 2.0), 90.0);

    assert_close(pivot, pivot.transform(&m));
    assert_close(Vec3::new(1.0, 2.0, 0.0), Vec3::new(2.0, 1.0, 0.0).transform(&m));
}

#[test]
fn scaling_is_diagonal() {
    let m = Matrix4x4::scaling(Vec3::new(2.0, 3.0, -1.0));

    assert_close(Vec3::new(2.0, 3.0, -1.0), Vec3::new(1.0, 1.0, 1.0).transform(&m));
}

#[test]
fn reflection_mirrors_through_offset_plane() {
    let m = Matrix4x4::reflection(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

    assert_close(Vec3::new(5.0, 1.0, -3.0), Vec3::new(5.0, 3.0, -3.0).transform(&m));
    assert_close(Vec3::new(0.0, 2.0, 7.0), Vec3::new(0.0, 2.0, 7.0).transform(&m));
}

#[test]
fn product_then_inverse_round_trips() {
    let m = Matrix4x4::translation(Vec3::new(3.0, -1.0, 2.0))
        * Matrix4x4::rotation(Vec3::new(0.5, 0.0, 1.0), Vec3::new(1.0, 1.0, 0.0), 33.0)
        * Matrix4x4::scaling(Vec3::new(2.0, 0.5, 4.0));
    let p = Vec3::new(-1.5, 2.25, 8.0);

    assert_close(p, p.transform(&m).transform(&m.inverse()));
}
