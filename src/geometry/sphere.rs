use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::matrix::Matrix4x4;
use crate::transform::Transform;
use crate::vec3::Point;
use crate::{Intersection, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeometryError::Degenerate("sphere radius must be positive"));
        }

        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Geometry for Sphere {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin() - self.center;

        // The direction is unit length, so the quadratic coefficient is 1.
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(&oc) - self.radius.powi(2);

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();
        let near = (-b - sqrt) / 2.0;
        let far = (-b + sqrt) / 2.0;

        let t = if ray.contains(near) {
            near
        } else if ray.contains(far) {
            far
        } else {
            return None;
        };

        let point = ray.offset(t);
        let normal = (point - self.center).unit();

        Some(Intersection::new(t, point, normal))
    }
}

/// Only the center moves; the radius is kept as is, so scaling a sphere
/// relocates it without resizing.
impl Transform for Sphere {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        Self {
            center: self.center.transform(transformation),
            radius: self.radius,
        }
    }
}
