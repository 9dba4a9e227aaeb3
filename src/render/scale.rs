// Scale context mapping the 24-unit design grid onto a target pixel size.
// Every coordinate a shape generator uses goes through `px`, which is the
// single source of resolution independence.

use crate::error::RenderError;
use image::RgbaImage;

/// Side length of the canonical design grid all shapes are authored in.
pub const CANONICAL_GRID: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    size: u32,
    factor: f32,
}

impl Scale {
    pub fn new(size: i32) -> Result<Self, RenderError> {
        if size <= 0 {
            return Err(RenderError::InvalidSize(size));
        }
        Ok(Self {
            size: size as u32,
            factor: size as f32 / CANONICAL_GRID,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Convert a canonical grid coordinate to pixels, rounding to nearest.
    /// Coordinates are non-negative, so ties land on the higher pixel.
    pub fn px(&self, units: f32) -> i32 {
        (units * self.factor).round() as i32
    }

    pub fn pxf(&self, units: f32) -> f32 {
        units * self.factor
    }

    /// Scaled value with a lower bound, for stroke widths and dot radii
    /// that must stay visible at the smallest resolution.
    pub fn px_min(&self, units: f32, min: i32) -> i32 {
        self.px(units).max(min)
    }

    /// Integer pixel center of the surface.
    pub fn center(&self) -> i32 {
        (self.size / 2) as i32
    }

    /// Fresh fully-transparent surface at the target size.
    pub fn surface(&self) -> RgbaImage {
        RgbaImage::new(self.size, self.size)
    }
}
