use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use coinscan::loader::DEFAULT_IMAGE_PATH;
use coinscan::{DetectionParams, DetectionPipeline, load_image, report};

#[derive(Parser)]
#[command(name = "coinscan")]
#[command(about = "Count and measure the outlines of objects in an image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", default_value = DEFAULT_IMAGE_PATH)]
    image_path: PathBuf,

    /// JSON file with detection parameters
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Gaussian kernel size (odd)
    #[arg(long, value_name = "N")]
    blur_kernel: Option<u32>,

    /// Gaussian sigma; 0 derives it from the kernel size
    #[arg(long, value_name = "SIGMA")]
    blur_sigma: Option<f32>,

    /// Canny low hysteresis threshold
    #[arg(long)]
    low_threshold: Option<f32>,

    /// Canny high hysteresis threshold
    #[arg(long)]
    high_threshold: Option<f32>,

    /// Minimum contour area to report
    #[arg(long)]
    min_area: Option<f64>,

    /// Save the annotated side-by-side image
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the measurements as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Save debug outputs to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Do not open the result window
    #[arg(long)]
    no_display: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then individual flags.
    fn params(&self) -> anyhow::Result<DetectionParams> {
        let mut params = match &self.config {
            Some(path) => DetectionParams::from_path(path)
                .with_context(|| format!("loading parameters from {}", path.display()))?,
            None => DetectionParams::default(),
        };

        if let Some(v) = self.blur_kernel {
            params.blur_kernel = v;
        }
        if let Some(v) = self.blur_sigma {
            params.blur_sigma = v;
        }
        if let Some(v) = self.low_threshold {
            params.low_threshold = v;
        }
        if let Some(v) = self.high_threshold {
            params.high_threshold = v;
        }
        if let Some(v) = self.min_area {
            params.min_area = v;
        }
        Ok(params)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coinscan={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let params = args.params()?;
    debug!(?params, "detection parameters");

    info!("loading image {}", args.image_path.display());
    let img = load_image(&args.image_path)?;
    info!("image loaded: {}x{}", img.width(), img.height());

    let mut detector = DetectionPipeline::new(params)?.with_verbose(args.verbose);
    if let Some(debug_dir) = args.debug_out.clone() {
        detector = detector.with_debug(debug_dir)?;
    }

    let analysis = detector.analyze(&img)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &analysis)?;
    out.flush()?;

    if let Some(path) = &args.json {
        report::write_json(path, &analysis)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("report written to {}", path.display());
    }

    let composite = analysis.composite()?;

    if let Some(path) = &args.output {
        composite
            .save(path)
            .with_context(|| format!("saving result image to {}", path.display()))?;
        info!("result image saved to {}", path.display());
    }

    if !args.no_display {
        display(&composite)?;
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn display(composite: &image::RgbImage) -> anyhow::Result<()> {
    coinscan::gui::show(coinscan::gui::WINDOW_TITLE, composite)
        .map_err(|e| anyhow::anyhow!("result window failed: {}", e))
}

#[cfg(not(feature = "gui"))]
fn display(_composite: &image::RgbImage) -> anyhow::Result<()> {
    tracing::warn!("built without the `gui` feature; use --output to save the result instead");
    Ok(())
}
