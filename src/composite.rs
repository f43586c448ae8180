use image::{Rgba, RgbaImage};

/// Width of the destination window the overlay is blended into.
pub const OVERLAY_WINDOW_WIDTH: i32 = 330;

/// Source offset of the overlay blend: destination point `p` reads overlay
/// point `p + OVERLAY_SRC_OFFSET`, so overlay `(0, 0)` lands at destination
/// `(265, 180)`.
pub const OVERLAY_SRC_OFFSET: Point = Point { x: -265, y: -180 };

/// Integer pixel position; also used as a blit offset, which may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle; `max` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    pub fn of_image(img: &RgbaImage) -> Self {
        Self::new(0, 0, img.width() as i32, img.height() as i32)
    }

    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.min.x && x < self.max.x && y >= self.min.y && y < self.max.y
    }

    pub fn intersect(self, other: Self) -> Self {
        Self::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        )
    }
}

/// Copies `src` into `rect` of `dst` with source-replace semantics
/// (destination pixel = source pixel, alpha included). Destination point `p`
/// reads source `src_offset + (p - rect.min)`; reads outside `src` and writes
/// outside `dst` are clipped.
pub fn blit_replace(dst: &mut RgbaImage, rect: Rect, src: &RgbaImage, src_offset: Point) {
    let clipped = rect.intersect(Rect::of_image(dst));
    if clipped.is_empty() {
        return;
    }
    let src_bounds = Rect::of_image(src);

    for y in clipped.min.y..clipped.max.y {
        for x in clipped.min.x..clipped.max.x {
            let sx = src_offset.x + (x - rect.min.x);
            let sy = src_offset.y + (y - rect.min.y);
            if !src_bounds.contains(sx, sy) {
                continue;
            }
            let px = *src.get_pixel(sx as u32, sy as u32);
            dst.put_pixel(x as u32, y as u32, px);
        }
    }
}

/// Blends `src` into `rect` of `dst` with source-over semantics in
/// straight-alpha space. Clipping matches [`blit_replace`].
pub fn blit_over(dst: &mut RgbaImage, rect: Rect, src: &RgbaImage, src_offset: Point) {
    let clipped = rect.intersect(Rect::of_image(dst));
    if clipped.is_empty() {
        return;
    }
    let src_bounds = Rect::of_image(src);

    for y in clipped.min.y..clipped.max.y {
        for x in clipped.min.x..clipped.max.x {
            let sx = src_offset.x + (x - rect.min.x);
            let sy = src_offset.y + (y - rect.min.y);
            if !src_bounds.contains(sx, sy) {
                continue;
            }
            let s = *src.get_pixel(sx as u32, sy as u32);
            let d = *dst.get_pixel(x as u32, y as u32);
            dst.put_pixel(x as u32, y as u32, over_straight(d, s));
        }
    }
}

/// Source-over for straight (non-premultiplied) alpha:
/// `outA = sA + dA*(1-sA)`, `outC = (sC*sA + dC*dA*(1-sA)) / outA`.
fn over_straight(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src.0[3]);
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }

    let da = u32::from(dst.0[3]);
    let inv = 255 - sa;

    // out alpha scaled by 255; nonzero since sa > 0 here
    let out_a255 = sa * 255 + da * inv;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src.0[i]) * sa * 255 + u32::from(dst.0[i]) * da * inv;
        out[i] = ((num + out_a255 / 2) / out_a255) as u8;
    }
    out[3] = ((out_a255 + 127) / 255) as u8;
    Rgba(out)
}

/// Allocates a canvas matching `template`, copies the template opaquely, then
/// source-over blends `prepared_overlay` into the fixed window
/// `(0,0)-(OVERLAY_WINDOW_WIDTH, height)` at [`OVERLAY_SRC_OFFSET`].
/// Neither input is mutated.
pub fn render_target(template: &RgbaImage, prepared_overlay: &RgbaImage) -> RgbaImage {
    let (w, h) = template.dimensions();
    let mut target = RgbaImage::new(w, h);

    blit_replace(&mut target, Rect::of_image(template), template, Point::ZERO);

    let window = Rect::new(0, 0, OVERLAY_WINDOW_WIDTH, h as i32);
    blit_over(&mut target, window, prepared_overlay, OVERLAY_SRC_OFFSET);
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn rect_intersect_clips_and_empties() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(4, -2, 20, 6);
        assert_eq!(a.intersect(b), Rect::new(4, 0, 10, 6));
        assert!(a.intersect(Rect::new(10, 0, 12, 10)).is_empty());
    }

    #[test]
    fn replace_copies_alpha_verbatim() {
        let mut dst = RgbaImage::from_pixel(4, 4, RED);
        let src = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 0]));
        let rect = Rect::of_image(&dst);
        blit_replace(&mut dst, rect, &src, Point::ZERO);
        assert_eq!(*dst.get_pixel(2, 2), Rgba([1, 2, 3, 0]));
    }

    #[test]
    fn over_respects_destination_rect() {
        let mut dst = RgbaImage::from_pixel(10, 10, RED);
        let src = RgbaImage::from_pixel(10, 10, BLUE);
        blit_over(&mut dst, Rect::new(0, 0, 5, 10), &src, Point::ZERO);
        assert_eq!(*dst.get_pixel(4, 9), BLUE);
        assert_eq!(*dst.get_pixel(5, 0), RED);
    }

    #[test]
    fn over_negative_src_offset_clips_left_edge() {
        let mut dst = RgbaImage::from_pixel(10, 1, RED);
        let src = RgbaImage::from_pixel(10, 1, BLUE);
        let rect = Rect::of_image(&dst);
        blit_over(&mut dst, rect, &src, Point::new(-3, 0));
        assert_eq!(*dst.get_pixel(2, 0), RED);
        assert_eq!(*dst.get_pixel(3, 0), BLUE);
    }

    #[test]
    fn over_src_alpha_0_is_noop() {
        assert_eq!(over_straight(RED, Rgba([9, 9, 9, 0])), RED);
    }

    #[test]
    fn over_src_opaque_replaces_dst() {
        assert_eq!(over_straight(RED, BLUE), BLUE);
    }

    #[test]
    fn over_dst_transparent_returns_src() {
        let src = Rgba([100, 110, 120, 200]);
        assert_eq!(over_straight(Rgba([0, 0, 0, 0]), src), src);
    }

    #[test]
    fn over_half_alpha_blends_toward_src() {
        let out = over_straight(RED, Rgba([0, 0, 255, 128]));
        assert_eq!(out, Rgba([127, 0, 128, 255]));
    }

    #[test]
    fn render_target_opaque_copy_matches_template() {
        let template = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let overlay = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        let target = render_target(&template, &overlay);
        assert_eq!(target.as_raw(), template.as_raw());
    }
}
