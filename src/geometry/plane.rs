use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::matrix::Matrix4x4;
use crate::transform::{transform_direction, Transform};
use crate::vec3::{Point, Vec3};
use crate::{Intersection, Ray};

/// A plane can be defined as a point lying on it and a normal (defining the
/// orientation of the plane). The normal is fixed at construction and returned
/// for every hit regardless of which side the ray comes from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    point: Point,
    normal: Vec3<f64>,
}

impl Plane {
    pub fn new(point: Point, normal: Vec3<f64>) -> Result<Self, GeometryError> {
        Ok(Self {
            point,
            normal: normal.try_unit()?,
        })
    }

    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.normal
    }
}

impl Geometry for Plane {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let denominator = self.normal.dot(ray.direction());
        if denominator.abs() < ray.epsilon() {
            return None;
        }

        let t = self.normal.dot(&(self.point - ray.origin())) / denominator;
        if !ray.contains(t) {
            return None;
        }

        Some(Intersection::new(t, ray.offset(t), self.normal))
    }
}

impl Transform for Plane {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        Self {
            point: self.point.transform(transformation),
            normal: transform_direction(self.point, self.normal, transformation).unit(),
        }
    }
}
