use crate::vec3::{Point, Vec3};

/// A valid hit: distance along the ray, the hit point and the unit surface normal.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub t: f64,
    pub point: Point,
    pub normal: Vec3<f64>,
}

impl Intersection {
    pub fn new(t: f64, point: Point, normal: Vec3<f64>) -> Self {
        Self { t, point, normal }
    }
}
