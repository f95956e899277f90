//! Surfaces of revolution, baked into a triangle mesh once at construction.

use crate::error::GeometryError;
use crate::geometry::{Geometry, TriangleMesh};
use crate::matrix::Matrix4x4;
use crate::transform::Transform;
use crate::vec3::{Point, Vec3};
use crate::{Intersection, Ray};

/// Bezier curve of arbitrary degree.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurve {
    control_points: Vec<Point>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point>) -> Result<Self, GeometryError> {
        if control_points.is_empty() {
            return Err(GeometryError::EmptyCurve);
        }

        Ok(Self { control_points })
    }

    /// Evaluates the curve at `u` in `[0, 1]` with de Casteljau's algorithm.
    pub fn point_at(&self, u: f64) -> Point {
        let mut points = self.control_points.clone();

        for level in (1..points.len()).rev() {
            for i in 0..level {
                points[i] = points[i].scale(1.0 - u) + points[i + 1].scale(u);
            }
        }

        points[0]
    }
}

/// The generating curve is dropped after tessellation; all queries go to the
/// baked mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct RevolutionSurface {
    mesh: TriangleMesh,
}

impl RevolutionSurface {
    /// Samples `resolution` points along the curve and revolves each one through
    /// `resolution` angles (first and last coincide) around the axis through
    /// `axis_point`.
    pub fn new(curve: &BezierCurve, axis_point: Point, axis: Vec3<f64>, resolution: usize) -> Result<Self, GeometryError> {
        if resolution < 2 {
            return Err(GeometryError::Resolution(resolution));
        }
        let axis = axis.try_unit()?;

        let step = 1.0 / (resolution - 1) as f64;
        let rotations: Vec<_> = (0..resolution)
            .map(|j| Matrix4x4::rotation(axis_point, axis, 360.0 * j as f64 * step))
            .collect();

        let mut vertices = Vec::with_capacity(resolution * resolution);
        for i in 0..resolution {
            let p = curve.point_at(i as f64 * step);
            vertices.extend(rotations.iter().map(|rotation| p.transform(rotation)));
        }

        let mut triangles = Vec::with_capacity(2 * (resolution - 1) * (resolution - 1));
        for i in 0..resolution - 1 {
            for j in 0..resolution - 1 {
                let a = i * resolution + j;
                let b = (i + 1) * resolution + j;
                let c = (i + 1) * resolution + j + 1;
                let d = i * resolution + j + 1;

                triangles.push([a, b, c]);
                triangles.push([a, c, d]);
            }
        }

        log::debug!(
            "tessellated surface of revolution: {} vertices, {} triangles",
            vertices.len(),
            triangles.len()
        );

        Ok(Self {
            mesh: TriangleMesh::new(vertices, triangles)?,
        })
    }

    #[inline]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }
}

impl Geometry for RevolutionSurface {
    #[inline]
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        self.mesh.intersection(ray)
    }
}

impl Transform for RevolutionSurface {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        Self {
            mesh: self.mesh.transform(transformation),
        }
    }
}
