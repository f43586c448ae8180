use std::ops::RangeInclusive;

use image::RgbaImage;

use crate::error::OverpressResult;
use crate::raster::{TRANSPARENT, draw_circle_outline};
use crate::transform::{resize_to_width, rotate};

/// Geometry of the prepared overlay. [`OverlayParams::default`] carries the
/// shipped contract values.
#[derive(Clone, Debug)]
pub struct OverlayParams {
    /// Width the overlay is scaled to before rotation; height follows the
    /// source aspect ratio.
    pub scaled_width: u32,
    /// Counter-clockwise rotation applied after scaling, in degrees.
    pub angle_degrees: f64,
    /// Center of the stamped cutouts, in rotated-overlay coordinates.
    pub cutout_center: (i32, i32),
    /// Radii of the stamped cutout outlines. Every radius shares
    /// `cutout_center`: the stamp is a set of concentric rings of growing
    /// radius, not a ring of separately placed circles.
    pub cutout_radii: RangeInclusive<i32>,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            scaled_width: 70,
            angle_degrees: 60.0,
            cutout_center: (5, 40),
            cutout_radii: 1..=12,
        }
    }
}

/// Prepares the overlay for compositing: scale to `scaled_width`, rotate by
/// `angle_degrees` over a transparent background, then erase the concentric
/// cutout outlines. Each step produces a fresh buffer; the source is not
/// mutated.
pub fn prepare_overlay(src: &RgbaImage, params: &OverlayParams) -> OverpressResult<RgbaImage> {
    let scaled = resize_to_width(src, params.scaled_width)?;
    let mut rotated = rotate(&scaled, params.angle_degrees, TRANSPARENT);

    let (cx, cy) = params.cutout_center;
    for r in params.cutout_radii.clone() {
        draw_circle_outline(&mut rotated, cx, cy, r, TRANSPARENT);
    }
    Ok(rotated)
}
