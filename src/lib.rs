//! Whitted-style recursive ray tracer.
//!
//! A [`Scene`] of spheres, planes, triangles, meshes and surfaces of
//! revolution, lit by point lights and seen through a pinhole [`Camera`], is
//! rendered into an [`Image`] by tracing one or more primary rays per pixel
//! and recursing through mirror and refracted rays up to the scene's depth.

#[macro_use]
extern crate serde_derive;

pub use crate::camera::{Basis, Camera};
pub use crate::color::Color;
pub use crate::engine::{render, RenderEngine, DEFAULT_EPSILON};
pub use crate::error::{ColorError, GeometryError, SceneError};
pub use crate::intersection::Intersection;
pub use crate::light::Light;
pub use crate::material::{Material, Texture};
pub use crate::matrix::Matrix4x4;
pub use crate::raster::Image;
pub use crate::ray::Ray;
pub use crate::scene::{Scene, DEFAULT_MAX_DEPTH};
pub use crate::transform::Transform;
pub use crate::vec3::{Point, Vec3};

pub mod geometry;

mod camera;
mod color;
mod engine;
mod error;
mod intersection;
mod light;
mod loader;
mod material;
mod matrix;
mod raster;
mod ray;
mod scene;
mod transform;
mod vec3;
mod vec4;
