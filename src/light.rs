use crate::color::Color;
use crate::vec3::Point;

/// Point light source of a certain color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point,
    pub color: Color,
}

impl Light {
    pub fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }
}
