use std::path::PathBuf;

use crate::assets::{load_image, save_png};
use crate::composite::render_target;
use crate::error::OverpressResult;
use crate::overlay::{OverlayParams, prepare_overlay};

/// Paths for one pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub template_path: PathBuf,
    pub overlay_path: PathBuf,
    pub output_path: PathBuf,
}

/// Runs the whole pipeline: load both inputs, prepare the overlay, composite
/// it onto the template, write the canvas as PNG.
///
/// Strictly sequential; every buffer is owned by this call. The first failed
/// stage aborts the run.
#[tracing::instrument(skip(config), fields(output = %config.output_path.display()))]
pub fn run(config: &PipelineConfig) -> OverpressResult<()> {
    let template = load_image(&config.template_path)?;
    let overlay = load_image(&config.overlay_path)?;
    tracing::debug!(
        template_w = template.width(),
        template_h = template.height(),
        overlay_w = overlay.width(),
        overlay_h = overlay.height(),
        "inputs decoded"
    );

    let prepared = prepare_overlay(&overlay, &OverlayParams::default())?;
    let target = render_target(&template, &prepared);
    save_png(&config.output_path, &target)
}
