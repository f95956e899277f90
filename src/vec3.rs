use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::error::GeometryError;
use crate::matrix::Matrix4x4;
use crate::vec4::Vec4;

/// A position in space. Structurally identical to a direction.
pub type Point = Vec3<f64>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "(T, T, T)")]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Vec3::new(x, y, z)
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Componentwise (Hadamard) product, used to filter one color by another.
    #[inline]
    pub fn hadamard(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vec3<f64> {
    pub const ZERO: Vec3<f64> = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Goes through the guarded division, so the zero vector maps to itself
    /// instead of NaNs. Use [`Vec3::try_unit`] where a zero length means the
    /// caller handed over degenerate geometry.
    #[inline]
    pub fn unit(&self) -> Vec3<f64> {
        *self / self.len()
    }

    pub fn try_unit(&self) -> Result<Vec3<f64>, GeometryError> {
        let len = self.len();
        if len == 0.0 || !len.is_finite() {
            return Err(GeometryError::Degenerate("zero-length vector cannot be normalized"));
        }

        Ok(*self / len)
    }

    /// Treats the vector as a point (w = 1) and applies a homogeneous transform.
    ///
    /// Directions must be carried as `(point + direction).transform(m) - point.transform(m)`
    /// so the translation part cancels out.
    #[inline]
    pub fn transform(&self, transformation: &Matrix4x4<f64>) -> Vec3<f64> {
        (transformation * Vec4::from(*self)).into()
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: AddAssign> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, other: Vec3<T>) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vec3<f64> {
    type Output = Vec3<f64>;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;

    #[inline]
    fn mul(self, v: Vec3<f64>) -> Self::Output {
        v.scale(self)
    }
}

/// Division by zero divides by one instead, so degenerate transforms never
/// leak NaNs into the renderer.
impl Div<f64> for Vec3<f64> {
    type Output = Vec3<f64>;

    #[inline]
    fn div(self, divisor: f64) -> Self::Output {
        let divisor = if divisor == 0.0 { 1.0 } else { divisor };

        Vec3 {
            x: self.x / divisor,
            y: self.y / divisor,
            z: self.z / divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn close(a: Vec3<f64>, b: Vec3<f64>) -> bool {
        (a - b).len() < TOLERANCE
    }

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, -2.0, -2.0);
        let b = Vec3::new(3.0, 6.0, 9.0);

        assert_eq!(Vec3::new(4.0, 4.0, 7.0), a + b);
        assert_eq!(Vec3::new(2.0, 8.0, 11.0), b - a);
        assert_eq!(Vec3::new(2.0, -4.0, -4.0), a * 2.0);
        assert_eq!(Vec3::new(0.5, -1.0, -1.0), a / 2.0);
        assert_eq!(Vec3::new(-1.0, 2.0, 2.0), -a);
        assert_eq!(-27.0, a.dot(&b));
        assert_eq!(Vec3::new(-6.0, -15.0, 12.0), a.cross(&b));
        assert_eq!(Vec3::new(3.0, -12.0, -18.0), a.hadamard(&b));
        assert_eq!(3.0, a.len());
    }

    #[test]
    fn add_then_sub_is_identity() {
        let a = Vec3::new(0.3, -7.25, 1e3);
        let b = Vec3::new(-4.5, 0.125, 2.0);

        assert!(close(a, a + b - b));
    }

    #[test]
    fn lagrange_identity() {
        let a: Vec3<f64> = Vec3::new(1.5, -2.0, 0.25);
        let b: Vec3<f64> = Vec3::new(-3.0, 4.0, 7.0);

        let cross = a.cross(&b);
        let lhs = cross.dot(&cross) + a.dot(&b).powi(2);
        let rhs = a.dot(&a) * b.dot(&b);

        assert!((lhs - rhs).abs() < 1e-9 * rhs);
    }

    #[test]
    fn unit_is_normalized_and_idempotent() {
        let v = Vec3::new(1.0, -2.0, -2.0);
        let u = v.unit();

        assert!(close(Vec3::new(1.0 / 3.0, -2.0 / 3.0, -2.0 / 3.0), u));
        assert!((u.len() - 1.0).abs() < TOLERANCE);
        assert!(close(u, u.unit()));
    }

    #[test]
    fn division_by_zero_is_lenient() {
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(v, v / 0.0);
        assert_eq!(Vec3::ZERO, Vec3::ZERO.unit());
    }

    #[test]
    fn try_unit_rejects_zero_vector() {
        assert!(Vec3::ZERO.try_unit().is_err());
        assert!(Vec3::new(0.0, 0.0, 2.0).try_unit().is_ok());
    }

    #[test]
    fn transform_as_point() {
        let m = Matrix4x4::translation(Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(Vec3::new(2.0, 2.0, 2.0), Vec3::new(1.0, 0.0, -1.0).transform(&m));
    }
}
