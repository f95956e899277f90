use std::sync::Arc;

use crate::material::Material;
use crate::matrix::Matrix4x4;
use crate::transform::Transform;
use crate::{Intersection, Ray};

mod mesh;
mod plane;
mod revolution;
mod sphere;
mod triangle;

pub use self::mesh::TriangleMesh;
pub use self::plane::Plane;
pub use self::revolution::{BezierCurve, RevolutionSurface};
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

pub trait Geometry {
    /// Nearest hit within the ray's range, if any.
    fn intersection(&self, ray: &Ray) -> Option<Intersection>;
}

/// The closed set of primitives a scene is built from.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Mesh(TriangleMesh),
    Revolution(RevolutionSurface),
}

impl Geometry for Shape {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Shape::Sphere(g) => g.intersection(ray),
            Shape::Plane(g) => g.intersection(ray),
            Shape::Triangle(g) => g.intersection(ray),
            Shape::Mesh(g) => g.intersection(ray),
            Shape::Revolution(g) => g.intersection(ray),
        }
    }
}

impl Transform for Shape {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        match self {
            Shape::Sphere(g) => Shape::Sphere(g.transform(transformation)),
            Shape::Plane(g) => Shape::Plane(g.transform(transformation)),
            Shape::Triangle(g) => Shape::Triangle(g.transform(transformation)),
            Shape::Mesh(g) => Shape::Mesh(g.transform(transformation)),
            Shape::Revolution(g) => Shape::Revolution(g.transform(transformation)),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($variant:ident($ty:ty)),*) => {
        $(
            impl From<$ty> for Shape {
                #[inline]
                fn from(g: $ty) -> Self {
                    Shape::$variant(g)
                }
            }
        )*
    };
}

impl_from_primitive!(Sphere(Sphere), Plane(Plane), Triangle(Triangle), Mesh(TriangleMesh), Revolution(RevolutionSurface));

/// A shape placed in the scene with the material it is shaded with. Materials
/// are shared between models.
#[derive(Clone, Debug)]
pub struct Model {
    pub geometry: Shape,
    pub material: Arc<Material>,
}

impl Model {
    pub fn new<G: Into<Shape>>(geometry: G, material: Arc<Material>) -> Self {
        Self {
            geometry: geometry.into(),
            material,
        }
    }
}

impl Geometry for Model {
    #[inline]
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        self.geometry.intersection(ray)
    }
}

impl Transform for Model {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        Self {
            geometry: self.geometry.transform(transformation),
            material: Arc::clone(&self.material),
        }
    }
}
