//! Pinhole camera and primary ray generation.

use crate::error::GeometryError;
use crate::matrix::Matrix4x4;
use crate::transform::{transform_direction, Transform};
use crate::vec3::{Point, Vec3};
use crate::Ray;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub v_res: u32,
    pub h_res: u32,

    /// Side of one pixel on the image plane, in world units.
    pub pixel_size: f64,
    pub focal_distance: f64,
    pub eye: Point,
    pub look_at: Point,
    pub up: Vec3<f64>,
}

/// Right-handed orthonormal view basis. `w` points from the scene toward the eye.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Basis {
    pub w: Vec3<f64>,
    pub u: Vec3<f64>,
    pub v: Vec3<f64>,
}

impl Camera {
    /// Rejects a view that cannot form a basis: `eye` on top of `look_at`, or
    /// `up` parallel to the viewing direction.
    pub fn new(
        v_res: u32,
        h_res: u32,
        pixel_size: f64,
        focal_distance: f64,
        eye: Point,
        look_at: Point,
        up: Vec3<f64>,
    ) -> Result<Self, GeometryError> {
        let w = (eye - look_at)
            .try_unit()
            .map_err(|_| GeometryError::Degenerate("camera eye and look-at coincide"))?;
        up.cross(&w)
            .try_unit()
            .map_err(|_| GeometryError::Degenerate("camera up is parallel to the view direction"))?;

        Ok(Self {
            v_res,
            h_res,
            pixel_size,
            focal_distance,
            eye,
            look_at,
            up,
        })
    }

    pub fn basis(&self) -> Basis {
        let w = (self.eye - self.look_at).unit();
        let u = self.up.cross(&w).unit();
        let v = w.cross(&u);

        Basis { w, u, v }
    }

    /// Image-plane position of the top-left pixel sample.
    pub fn plane_origin(&self, basis: &Basis) -> Point {
        let half_height = f64::from(self.v_res) / 2.0;
        let half_width = f64::from(self.h_res) / 2.0;

        self.eye - basis.w.scale(self.focal_distance)
            + (basis.v.scale(half_height) - basis.u.scale(half_width)).scale(self.pixel_size)
    }

    /// Ray from the eye through the image-plane sample at pixel coordinates
    /// `(x, y)`, top-left origin. Fractional coordinates address sub-pixel samples.
    pub fn primary_ray(&self, basis: &Basis, plane_origin: Point, x: f64, y: f64, epsilon: f64) -> Ray {
        let sample = plane_origin + (basis.u.scale(x) - basis.v.scale(y)).scale(self.pixel_size);

        Ray::new(self.eye, sample - self.eye, epsilon..f64::INFINITY)
    }
}

impl Transform for Camera {
    fn transform(&self, transformation: &Matrix4x4<f64>) -> Self {
        Self {
            eye: self.eye.transform(transformation),
            look_at: self.look_at.transform(transformation),
            up: transform_direction(self.eye, self.up, transformation),
            ..*self
        }
    }
}
