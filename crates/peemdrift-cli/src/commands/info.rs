use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use peemdrift_core::io::image_io::load_stack;
use peemdrift_core::region::central_region_bounds;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image files, in sequence order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let stack = load_stack(&args.files)?;
    let (h, w) = stack.slice_dim();
    let (r_lo, r_hi) = central_region_bounds(h);
    let (c_lo, c_hi) = central_region_bounds(w);

    println!("Frames:             {}", stack.len());
    println!("Dimensions:         {}x{}", w, h);
    println!(
        "Default template:   {}x{} at ({}, {})",
        c_hi - c_lo,
        r_hi - r_lo,
        c_lo,
        r_lo
    );

    let total_mb = (stack.len() * h * w * std::mem::size_of::<f32>()) as f64 / (1024.0 * 1024.0);
    println!("Stack size:         {:.1} MB", total_mb);

    Ok(())
}
