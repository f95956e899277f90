use std::ops::Range;

use crate::vec3::{Point, Vec3};

/// A half-line with a unit direction.
///
/// `range` bounds the accepted hit distances, both ends exclusive. Its start
/// doubles as the tolerance primitives use to reject near-parallel hits.
#[derive(Clone, Debug)]
pub struct Ray {
    origin: Point,
    direction: Vec3<f64>,
    range: Range<f64>,
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3<f64>, range: Range<f64>) -> Self {
        Self {
            origin,
            direction: direction.unit(),
            range,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.range.start
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Point {
        self.origin + self.direction.scale(t)
    }

    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t > self.range.start && t < self.range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0), 0.001..f64::INFINITY);

        assert_eq!(Vec3::new(0.0, 0.6, 0.8), *ray.direction());
        assert_eq!(Vec3::new(0.0, 3.0, 4.0), ray.offset(5.0));
    }

    #[test]
    fn range_is_exclusive() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.001..10.0);

        assert!(!ray.contains(0.001));
        assert!(!ray.contains(0.0));
        assert!(ray.contains(0.0011));
        assert!(!ray.contains(10.0));
    }
}
