use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use peemdrift_core::config::{DriftConfig, SubpixelPolicy};
use peemdrift_core::drift::estimate_drift_with_progress;
use peemdrift_core::io::image_io::{load_image, load_stack, save_png};
use peemdrift_core::matching::MatchMethod;
use peemdrift_core::region::default_template_from_stack;

use crate::summary;

#[derive(Clone, ValueEnum)]
pub enum MethodArg {
    Sqdiff,
    SqdiffNormed,
    Ccorr,
    CcorrNormed,
    Ccoeff,
    CcoeffNormed,
}

impl From<&MethodArg> for MatchMethod {
    fn from(arg: &MethodArg) -> Self {
        match arg {
            MethodArg::Sqdiff => MatchMethod::SqDiff,
            MethodArg::SqdiffNormed => MatchMethod::SqDiffNormed,
            MethodArg::Ccorr => MatchMethod::CrossCorr,
            MethodArg::CcorrNormed => MatchMethod::CrossCorrNormed,
            MethodArg::Ccoeff => MatchMethod::CorrCoeff,
            MethodArg::CcoeffNormed => MatchMethod::CorrCoeffNormed,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum BoundaryArg {
    /// Fail on peaks where refinement is undefined
    Strict,
    /// Keep the integer peak for those frames
    Integer,
}

#[derive(Args)]
pub struct DriftArgs {
    /// Input image files, in sequence order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Template image; defaults to the central region of the first frame
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Match-scoring method
    #[arg(long, value_enum, default_value = "ccoeff-normed")]
    pub method: MethodArg,

    /// Disable sub-pixel refinement
    #[arg(long)]
    pub no_subpixel: bool,

    /// Behavior when sub-pixel refinement hits a border or non-positive score
    #[arg(long, value_enum, default_value = "strict")]
    pub on_boundary: BoundaryArg,

    /// Save the template actually used as a PNG preview
    #[arg(long)]
    pub save_template: Option<PathBuf>,

    /// Write the drift series CSV here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &DriftArgs) -> Result<()> {
    let stack = load_stack(&args.files)?;
    tracing::debug!(frames = stack.len(), "loaded frame sequence");

    let template = match &args.template {
        Some(path) => {
            load_image(path).with_context(|| format!("Failed to load template {}", path.display()))?
        }
        None => default_template_from_stack(&stack),
    };

    if let Some(ref path) = args.save_template {
        save_png(template.view(), path)?;
    }

    let config = DriftConfig {
        method: MatchMethod::from(&args.method),
        subpixel: !args.no_subpixel,
        subpixel_policy: match args.on_boundary {
            BoundaryArg::Strict => SubpixelPolicy::Strict,
            BoundaryArg::Integer => SubpixelPolicy::FallbackToInteger,
        },
    };

    summary::print_drift_summary(&stack, template.dim(), &config, args.output.as_deref());

    let pb = ProgressBar::new(stack.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Matching frames");

    let series = estimate_drift_with_progress(&stack, template.view(), &config, |done| {
        pb.set_position(done as u64);
    })?;
    pb.finish_with_message("Done");

    let mut csv = String::from("frame,dx,dy\n");
    for (i, d) in series.iter().enumerate() {
        writeln!(csv, "{},{:.4},{:.4}", i, d.dx, d.dy)?;
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Drift series saved to {}", path.display());
        }
        None => print!("{}", csv),
    }

    summary::print_drift_stats(&series);

    Ok(())
}
