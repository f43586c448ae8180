use std::path::PathBuf;

use clap::Parser;

use overpress::{PipelineConfig, run};

/// Composite the decorative overlay onto the template image and write a PNG.
#[derive(Parser, Debug)]
#[command(name = "overpress", version)]
struct Cli {
    /// Template image path (PNG or JPEG, format sniffed from content).
    #[arg(short = 't', long = "template", default_value = "./resources/template.jpg")]
    template: PathBuf,

    /// Overlay image path.
    #[arg(short = 'l', long = "overlay", default_value = "./resources/overlay.png")]
    overlay: PathBuf,

    /// Output path; always written as PNG.
    #[arg(short = 'o', long = "output", default_value = "./output.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = PipelineConfig {
        template_path: cli.template,
        overlay_path: cli.overlay,
        output_path: cli.output,
    };
    run(&config)?;

    eprintln!("wrote {}", config.output_path.display());
    Ok(())
}
