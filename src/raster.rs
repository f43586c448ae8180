use image::{Rgba, RgbaImage};

/// Fully transparent straight-alpha pixel. Used both as the rotation fill and
/// as the "erase" color when stamping cutouts.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Bounds-checked pixel write: coordinates outside the image are dropped
/// silently, never an error.
pub fn put_px(img: &mut RgbaImage, x: i32, y: i32, px: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    img.put_pixel(x, y, px);
}

/// Midpoint circle: writes `color` along the thin outline of the circle
/// centered at `(x0, y0)` with radius `r`, eight symmetric points per step.
/// The interior is untouched, so writing [`TRANSPARENT`] punches a ring of
/// holes rather than erasing a disk.
///
/// Radii 0 and 1 write nothing: the loop condition fails on the first check.
pub fn draw_circle_outline(img: &mut RgbaImage, x0: i32, y0: i32, r: i32, color: Rgba<u8>) {
    let (mut x, mut y) = (r - 1, 0);
    let (mut dx, mut dy) = (1, 1);
    let mut err = dx - 2 * r;

    while x > y {
        put_px(img, x0 + x, y0 + y, color);
        put_px(img, x0 + y, y0 + x, color);
        put_px(img, x0 - y, y0 + x, color);
        put_px(img, x0 - x, y0 + y, color);
        put_px(img, x0 - x, y0 - y, color);
        put_px(img, x0 - y, y0 - x, color);
        put_px(img, x0 + y, y0 - x, color);
        put_px(img, x0 + x, y0 - y, color);

        if err <= 0 {
            y += 1;
            err += dy;
            dy += 2;
        }
        if err > 0 {
            x -= 1;
            dx += 2;
            err += dx - 2 * r;
        }
    }
}
