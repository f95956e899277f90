//! Flat triangles, intersected with the Möller-Trumbore algorithm.

use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::matrix::Matrix4x4;
use crate::transform::Transform;
use crate::vec3::{Point, Vec3};
use crate::{Intersection, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],

    /// Computed once from the two edges leaving the first vertex.
    normal: Vec3<f64>,
}

impl Triangle {
    pub fn new(v0: Point, v1: Point, v2: Point) -> Result<Self, GeometryError> {
        let normal = (v1 - v0)
            .cross(&(v2 - v0))
            .try_unit()
            .map_err(|_| GeometryError::Degenerate("triangle vertices are collinear"))?;

        Ok(Self {
            vertices: [v0, v1, v2],
            normal,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.normal
    }
}

/// Returns the hit distance together with the barycentric weights of `v1` and
/// `v2`. Degenerate triangles are rejected as parallel to every ray.
pub(crate) fn moller_trumbore(v0: Point, v1: Point, v2: Point, ray: &Ray) -> Option<(f64, f64, f64)> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray.direction().cross(&edge2);
    let a = edge1.dot(&h);
    if a.abs() < ray.epsilon() {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin() - v0;
    let u = f * s.dot(&h);
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction().dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);
    if !ray.contains(t) {
        return None;
    }

    Some((t, u, v))
}

impl Geometry for Triangle {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let [v0, v1, v2] = self.vertices;
        let (t, _, _) = moller_trumbore(v0, v1, v2, ray)?;

        Some(Intersection::new(t, ray.offset(t), self.normal))
    }
}

impl Transform for Triangle {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        let [v0, v1, v2] = self.vertices;
        let vertices = [
            v0.transform(transformation),
            v1.transform(transformation),
            v2.transform(transformation),
        ];

        // A collapsing transform leaves a zero normal; such a triangle is
        // rejected as parallel by every ray.
        let normal = (vertices[1] - vertices[0]).cross(&(vertices[2] - vertices[0])).unit();

        Self { vertices, normal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0)).unwrap()
    }

    fn ray(origin: Point) -> Ray {
        Ray::new(origin, Vec3::new(0.0, 0.0, 1.0), 0.001..f64::INFINITY)
    }

    #[test]
    fn centroid_has_equal_weights() {
        let [v0, v1, v2] = *triangle().vertices();
        let (t, u, v) = moller_trumbore(v0, v1, v2, &ray(Vec3::new(1.0, 1.0, -5.0))).unwrap();

        assert!((t - 5.0).abs() < 1e-9);
        assert!((u - 1.0 / 3.0).abs() < 1e-9);
        assert!((v - 1.0 / 3.0).abs() < 1e-9);
        assert!((1.0 - u - v - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn normal_is_fixed_by_winding() {
        let hit = triangle().intersection(&ray(Vec3::new(1.0, 1.0, -5.0))).unwrap();
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), hit.normal);

        let from_behind = Ray::new(Vec3::new(1.0, 1.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.001..f64::INFINITY);
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), triangle().intersection(&from_behind).unwrap().normal);
    }

    #[test]
    fn miss_outside_edges_but_on_plane() {
        // (2.5, 2.5) is on the triangle's plane but past the hypotenuse.
        assert!(triangle().intersection(&ray(Vec3::new(2.5, 2.5, -5.0))).is_none());
        assert!(triangle().intersection(&ray(Vec3::new(-0.5, 1.0, -5.0))).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let grazing = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.001..f64::INFINITY);

        assert!(triangle().intersection(&grazing).is_none());
    }

    #[test]
    fn rejects_collinear_vertices() {
        let line = Triangle::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));

        assert!(line.is_err());
    }

    #[test]
    fn transform_then_inverse_round_trips() {
        let m = Matrix4x4::rotation(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0), 47.0)
            * Matrix4x4::translation(Vec3::new(0.0, -2.0, 5.0));
        let back = triangle().transform(&m).transform(&m.inverse());

        for (a, b) in back.vertices().iter().zip(triangle().vertices()) {
            assert!((*a - *b).len() < 1e-9);
        }
        assert!((back.normal() - triangle().normal()).len() < 1e-9);
    }
}
