//! Model that contains one or more triangles.

use crate::error::GeometryError;
use crate::geometry::triangle::moller_trumbore;
use crate::geometry::Geometry;
use crate::matrix::Matrix4x4;
use crate::transform::Transform;
use crate::vec3::Point;
use crate::{Intersection, Ray};

/// Indexed triangle list. Every face is flat: its normal comes from its own
/// edges, vertices carry no shared normals.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point>,
    triangles: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Every index must reference an existing vertex; a dangling index means a
    /// malformed scene and is reported here rather than during tracing.
    pub fn new(vertices: Vec<Point>, triangles: Vec<[usize; 3]>) -> Result<Self, GeometryError> {
        let len = vertices.len();
        if let Some(&index) = triangles.iter().flatten().find(|&&index| index >= len) {
            return Err(GeometryError::IndexOutOfBounds { index, len });
        }

        Ok(Self { vertices, triangles })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }
}

impl Geometry for TriangleMesh {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let mut nearest: Option<(f64, [usize; 3])> = None;

        for &face in &self.triangles {
            let [i, j, k] = face;
            if let Some((t, _, _)) = moller_trumbore(self.vertices[i], self.vertices[j], self.vertices[k], ray) {
                if nearest.map_or(true, |(min, _)| t < min) {
                    nearest = Some((t, face));
                }
            }
        }

        nearest.map(|(t, [i, j, k])| {
            let (v0, v1, v2) = (self.vertices[i], self.vertices[j], self.vertices[k]);
            let normal = (v1 - v0).cross(&(v2 - v0)).unit();

            Intersection::new(t, ray.offset(t), normal)
        })
    }
}

impl Transform for TriangleMesh {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v.transform(transformation)).collect(),
            triangles: self.triangles.clone(),
        }
    }
}
