use crate::color::Color;
use crate::vec3::Point;

/// Where a material takes its albedo from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Texture {
    Solid(Color),

    /// Three-axis checkerboard with cells a third of a unit wide.
    Checkered(Color, Color),
}

impl Texture {
    pub fn color_at(&self, point: &Point) -> Color {
        match *self {
            Texture::Solid(color) => color,
            Texture::Checkered(first, second) => {
                let parity = |c: f64| (((c + 5.0) * 3.0) as i64).rem_euclid(2);
                let same_xz = parity(point.x) == parity(point.z);

                if (parity(point.y) == 1) == same_xz {
                    first
                } else {
                    second
                }
            }
        }
    }
}

/// Empirical shading coefficients: ambient + Lambertian diffuse + Phong specular,
/// plus the weights of the reflected and transmitted rays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub texture: Texture,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub reflection: f64,
    pub phong_exponent: f64,
    pub transmission: f64,
    pub index_of_refraction: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            texture: Texture::Solid(Color::WHITE),
            ambient: 0.05,
            diffuse: 1.0,
            specular: 1.0,
            reflection: 0.5,
            phong_exponent: 50.0,
            transmission: 0.0,
            index_of_refraction: 1.0,
        }
    }
}

impl Material {
    pub fn solid(color: Color) -> Self {
        Self {
            texture: Texture::Solid(color),
            ..Default::default()
        }
    }

    pub fn checkered(first: Color, second: Color) -> Self {
        Self {
            texture: Texture::Checkered(first, second),
            ..Default::default()
        }
    }

    /// Albedo at a surface point.
    #[inline]
    pub fn color_at(&self, point: &Point) -> Color {
        self.texture.color_at(point)
    }
}
