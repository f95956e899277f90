//! The pixel sink the renderer writes into, and its encoders.

use std::io::{self, Write};
use std::path::Path;

use image::{ImageResult, RgbImage};

use crate::color::Color;

/// Row-major grid of linear colors, origin at the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) outside {}x{} image", x, y, self.width, self.height);
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| self.pixel(x, y).to_rgb())
    }

    /// Writes an ASCII PPM (P3), one image row per line.
    pub fn write_ppm<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "P3 {} {}\n255", self.width, self.height)?;

        for row in self.pixels.chunks(self.width.max(1) as usize) {
            for color in row {
                let rgb = color.to_rgb();
                write!(w, "{} {} {} ", rgb[0], rgb[1], rgb[2])?;
            }
            writeln!(w)?;
        }

        w.flush()
    }

    /// Encodes with the `image` crate; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.to_rgb8().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_row_major() {
        let mut image = Image::new(3, 2);
        image.set_pixel(2, 1, Color::WHITE);

        assert_eq!(Color::WHITE, image.pixel(2, 1));
        assert_eq!(Color::BLACK, image.pixel(1, 2 - 1));
        assert_eq!(Color::WHITE, image.pixels[5]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        Image::new(2, 2).set_pixel(2, 0, Color::WHITE);
    }

    #[test]
    fn ppm_clamps_channels() {
        let mut image = Image::new(2, 1);
        image.set_pixel(0, 0, Color::new(1.5, 0.5, -1.0));
        image.set_pixel(1, 0, Color::from_rgb(1, 2, 3));

        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();

        assert_eq!("P3 2 1\n255\n255 128 0 1 2 3 \n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn to_rgb8_matches_pixels() {
        let mut image = Image::new(1, 2);
        image.set_pixel(0, 1, Color::WHITE);
        let rgb = image.to_rgb8();

        assert_eq!(&image::Rgb([0, 0, 0]), rgb.get_pixel(0, 0));
        assert_eq!(&image::Rgb([255, 255, 255]), rgb.get_pixel(0, 1));
    }
}
