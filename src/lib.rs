//! Overpress composites a decorative overlay onto a template image.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode the template and overlay images ([`assets`]); the
//!    container format is sniffed from content, never the extension
//! 2. **Prepare**: scale the overlay to a fixed width, rotate it over a
//!    transparent background, stamp concentric transparent cutout outlines
//!    ([`overlay`], [`transform`], [`raster`])
//! 3. **Composite**: opaque-copy the template onto a fresh canvas, then
//!    source-over blend the prepared overlay into a fixed window
//!    ([`composite`])
//! 4. **Write**: encode the canvas as 8-bit RGBA PNG ([`assets`])
//!
//! Key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Straight alpha end-to-end**: buffers are non-premultiplied RGBA8.
//! - **No IO in the pixel stages**: file access lives in [`assets`]; every
//!   transform step returns a fresh owned buffer.
#![forbid(unsafe_code)]

pub mod assets;
pub mod composite;
pub mod error;
pub mod overlay;
pub mod pipeline;
pub mod raster;
pub mod transform;

pub use assets::{load_image, save_png};
pub use composite::{
    OVERLAY_SRC_OFFSET, OVERLAY_WINDOW_WIDTH, Point, Rect, blit_over, blit_replace, render_target,
};
pub use error::{OverpressError, OverpressResult};
pub use overlay::{OverlayParams, prepare_overlay};
pub use pipeline::{PipelineConfig, run};
pub use raster::{TRANSPARENT, draw_circle_outline};
pub use transform::{resize_to_width, rotate};
