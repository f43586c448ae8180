use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};

use overpress::{
    OverlayParams, PipelineConfig, load_image, prepare_overlay, render_target, run, save_png,
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("pipeline_tests").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_fixture(path: &Path, w: u32, h: u32, color: Rgba<u8>) {
    RgbaImage::from_pixel(w, h, color)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

#[test]
fn pipeline_end_to_end() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = fixture_dir("e2e");
    let template_path = dir.join("template.png");
    let overlay_path = dir.join("overlay.png");
    let output_path = dir.join("out.png");
    let _ = std::fs::remove_file(&output_path);

    write_fixture(&template_path, 600, 400, RED);
    write_fixture(&overlay_path, 100, 100, BLUE);

    run(&PipelineConfig {
        template_path,
        overlay_path,
        output_path: output_path.clone(),
    })
    .unwrap();

    let out = load_image(&output_path).unwrap();
    assert_eq!(out.dimensions(), (600, 400));

    // everything right of the overlay window is untouched template
    for y in 0..400 {
        for x in 330..600 {
            assert_eq!(*out.get_pixel(x, y), RED, "pixel ({x}, {y})");
        }
    }

    // left of the shifted overlay content the source reads are clipped
    assert_eq!(*out.get_pixel(0, 0), RED);
    assert_eq!(*out.get_pixel(264, 220), RED);
    // above the overlay band
    assert_eq!(*out.get_pixel(300, 0), RED);

    // opaque interior of the rotated overlay lands at (265, 180) + (48, 48)
    assert_eq!(*out.get_pixel(313, 228), BLUE);

    // the radius-12 ring was erased to transparent in the overlay, so the
    // template shows through at (265, 180) + (16, 40)
    assert_eq!(*out.get_pixel(281, 220), RED);
}

#[test]
fn composited_canvas_survives_png_round_trip() {
    let dir = fixture_dir("round_trip");
    let output_path = dir.join("out.png");

    let template = RgbaImage::from_pixel(360, 200, RED);
    let overlay = RgbaImage::from_pixel(100, 100, BLUE);

    let prepared = prepare_overlay(&overlay, &OverlayParams::default()).unwrap();
    let target = render_target(&template, &prepared);

    save_png(&output_path, &target).unwrap();
    let back = load_image(&output_path).unwrap();
    assert_eq!(back.as_raw(), target.as_raw());
}

#[test]
fn missing_template_fails_the_run() {
    let dir = fixture_dir("missing_template");
    let overlay_path = dir.join("overlay.png");
    write_fixture(&overlay_path, 10, 10, BLUE);

    let err = run(&PipelineConfig {
        template_path: dir.join("nope.png"),
        overlay_path,
        output_path: dir.join("out.png"),
    })
    .unwrap_err();
    assert!(err.to_string().contains("nope.png"));
}
