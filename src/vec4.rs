use std::ops::{Index, IndexMut};

use crate::vec3::Vec3;

/// Homogeneous coordinates, only ever seen by the matrix layer.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Vec4<T>([T; 4]);

impl<T> Vec4<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Vec4([x, y, z, w])
    }
}

impl<T: Copy> From<[T; 4]> for Vec4<T> {
    #[inline]
    fn from(v: [T; 4]) -> Self {
        Vec4::new(v[0], v[1], v[2], v[3])
    }
}

/// Promotes a point, w = 1.
impl From<Vec3<f64>> for Vec4<f64> {
    #[inline]
    fn from(v: Vec3<f64>) -> Self {
        Vec4::new(v.x, v.y, v.z, 1.0)
    }
}

/// Drops w without a perspective divide: affine transforms keep it at 1.
impl From<Vec4<f64>> for Vec3<f64> {
    #[inline]
    fn from(v: Vec4<f64>) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}
