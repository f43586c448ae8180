use image::{
    Rgba, RgbaImage,
    imageops::{self, FilterType},
};

use crate::error::{OverpressError, OverpressResult};

/// Resamples `img` to `target_width`, preserving the aspect ratio
/// (`target_height = round(target_width * src_height / src_width)`, at least
/// one pixel). Lanczos3 over both axes.
pub fn resize_to_width(img: &RgbaImage, target_width: u32) -> OverpressResult<RgbaImage> {
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 {
        return Err(OverpressError::geometry(
            "resize_to_width: source width is 0",
        ));
    }

    let ratio = f64::from(src_h) / f64::from(src_w);
    let target_height = ((f64::from(target_width) * ratio).round() as u32).max(1);

    Ok(imageops::resize(
        img,
        target_width,
        target_height,
        FilterType::Lanczos3,
    ))
}

/// Rotates `img` about its center by `angle_degrees` (counter-clockwise for
/// positive angles), into a new image sized to hold the full rotated content.
/// Destination pixels not covered by the source become `fill`; samples are
/// bilinear, blending toward `fill` across the source edge.
///
/// A 0-degree rotation returns a pixel-identical copy at the input size.
pub fn rotate(img: &RgbaImage, angle_degrees: f64, fill: Rgba<u8>) -> RgbaImage {
    let (src_w, src_h) = img.dimensions();
    let theta = angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();

    let (w, h) = (f64::from(src_w), f64::from(src_h));
    // Bounding box of the rotated source corners; the epsilon keeps exact
    // multiples of 90 degrees from ceiling up an extra pixel.
    let out_w = ((w * cos.abs() + h * sin.abs()) - 1e-9).ceil().max(1.0) as u32;
    let out_h = ((w * sin.abs() + h * cos.abs()) - 1e-9).ceil().max(1.0) as u32;

    let src_cx = w / 2.0;
    let src_cy = h / 2.0;
    let dst_cx = f64::from(out_w) / 2.0;
    let dst_cy = f64::from(out_h) / 2.0;

    let mut out = RgbaImage::from_pixel(out_w, out_h, fill);
    for dy in 0..out_h {
        for dx in 0..out_w {
            // Inverse-map the destination pixel center into source space.
            // Raster y grows downward, so a visually counter-clockwise turn
            // inverts to the plain rotation matrix in pixel coordinates.
            let rx = f64::from(dx) + 0.5 - dst_cx;
            let ry = f64::from(dy) + 0.5 - dst_cy;
            let sx = cos * rx - sin * ry + src_cx;
            let sy = sin * rx + cos * ry + src_cy;
            out.put_pixel(dx, dy, sample_bilinear(img, sx, sy, fill));
        }
    }
    out
}

/// Bilinear sample at continuous coordinates (pixel centers at `i + 0.5`).
/// Taps outside the image read as `fill`.
fn sample_bilinear(img: &RgbaImage, x: f64, y: f64, fill: Rgba<u8>) -> Rgba<u8> {
    let fx = x - 0.5;
    let fy = y - 0.5;
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let tap = |px: i64, py: i64| -> [f64; 4] {
        if px < 0 || py < 0 || px >= i64::from(img.width()) || py >= i64::from(img.height()) {
            fill.0.map(f64::from)
        } else {
            img.get_pixel(px as u32, py as u32).0.map(f64::from)
        }
    };

    let p00 = tap(x0, y0);
    let p10 = tap(x0 + 1, y0);
    let p01 = tap(x0, y0 + 1);
    let p11 = tap(x0 + 1, y0 + 1);

    let w00 = (1.0 - tx) * (1.0 - ty);
    let w10 = tx * (1.0 - ty);
    let w01 = (1.0 - tx) * ty;
    let w11 = tx * ty;

    let mut out = [0u8; 4];
    for (i, o) in out.iter_mut().enumerate() {
        let v = p00[i] * w00 + p10[i] * w10 + p01[i] * w01 + p11[i] * w11;
        *o = v.round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}
