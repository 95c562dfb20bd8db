mod script;

use anyhow::{Context, Result};
use clap::Parser;
use paint_canvas::{PaintCanvas, EXPORT_FILE_NAME};
use script::Script;

/// paint-canvas: Replay recorded paint gestures and export the painting as PNG
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON gesture script
    #[clap(short, long)]
    pub script: String,

    /// Path to the PNG file to be created
    #[clap(short, long, default_value = EXPORT_FILE_NAME)]
    pub output: String,

    /// Initial surface width in pixels
    #[clap(long, default_value_t = 400)]
    pub width: u32,

    /// Initial surface height in pixels
    #[clap(long, default_value_t = 300)]
    pub height: u32,

    /// Seed for the paper grain texture
    #[clap(long)]
    pub seed: Option<u64>,

    /// Number of undo steps kept
    #[clap(long, default_value_t = paint_canvas::DEFAULT_HISTORY_CAPACITY)]
    pub history: usize,

    /// Pixels per inch recorded in the PNG metadata
    #[clap(long, default_value_t = 72.0)]
    pub ppi: f32,
}

fn main() {
    env_logger::init();
    let args: Args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script file: {}", args.script))?;
    let script = Script::from_json(&source)?;

    let mut builder = PaintCanvas::builder(args.width, args.height)
        .with_history_capacity(args.history)
        .with_export_ppi(args.ppi);
    if let Some(seed) = args.seed {
        builder = builder.with_noise_seed(seed);
    }
    let mut canvas = builder.build()?;

    script.replay(&mut canvas)?;

    let png = canvas.export_image()?;
    std::fs::write(&args.output, png)
        .with_context(|| format!("Failed to write output to {}", args.output))?;
    println!(
        "Wrote {} ({}x{})",
        args.output,
        canvas.width(),
        canvas.height()
    );
    Ok(())
}
