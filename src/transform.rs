use crate::matrix::Matrix4x4;
use crate::vec3::{Point, Vec3};

/// Affine transforms that rebuild a value from its transformed defining
/// geometry. Nothing is mutated in place.
pub trait Transform: Sized {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self;

    fn translate(&self, v: Vec3<f64>) -> Self {
        self.transform(&Matrix4x4::translation(v))
    }

    /// Rotates by `angle` degrees around the axis through `point`.
    fn rotate(&self, point: Point, axis: Vec3<f64>, angle: f64) -> Self {
        self.transform(&Matrix4x4::rotation(point, axis, angle))
    }

    fn scale(&self, v: Vec3<f64>) -> Self {
        self.transform(&Matrix4x4::scaling(v))
    }

    fn reflect(&self, point: Point, normal: Vec3<f64>) -> Self {
        self.transform(&Matrix4x4::reflection(point, normal))
    }
}

/// Carries a direction anchored at `anchor` through a point-space transform,
/// cancelling the translation part.
#[inline]
pub fn transform_direction(anchor: Point, direction: Vec3<f64>, transformation: &Matrix4x4<f64>) -> Vec3<f64> {
    (anchor + direction).transform(transformation) - anchor.transform(transformation)
}
