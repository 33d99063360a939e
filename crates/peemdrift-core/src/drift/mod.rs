//! Template-matching drift estimation across an image stack.
//!
//! Every slice is matched against one fixed template; the best-match
//! position per slice, in stack order, is the drift series. Slices are
//! independent, so large stacks run under Rayon with results reassembled
//! in order.

pub mod subpixel;

use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::ArrayView2;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::{DriftConfig, SubpixelPolicy};
use crate::consts::PARALLEL_SLICE_THRESHOLD;
use crate::error::{DriftError, Result};
use crate::matching::{match_template, min_max_loc};
use crate::stack::{Displacement, DriftSeries, ImageStack};

use self::subpixel::refine_peak_log_parabola;

/// Locate the template within a single slice.
pub fn compute_displacement(
    slice: ArrayView2<'_, f32>,
    template: ArrayView2<'_, f32>,
    config: &DriftConfig,
) -> Result<Displacement> {
    compute_displacement_indexed(slice, template, config, 0)
}

fn compute_displacement_indexed(
    slice: ArrayView2<'_, f32>,
    template: ArrayView2<'_, f32>,
    config: &DriftConfig,
    slice_index: usize,
) -> Result<Displacement> {
    let surface = match_template(slice, template, config.method)?;
    let extrema = min_max_loc(surface.view());

    let (row, col) = if config.method.is_minimizing() {
        extrema.min_loc
    } else {
        extrema.max_loc
    };

    if !config.subpixel {
        return Ok(Displacement {
            dx: col as f64,
            dy: row as f64,
        });
    }

    match refine_peak_log_parabola(surface.view(), row, col) {
        Ok((r, c)) => Ok(Displacement { dx: c, dy: r }),
        Err(reason) => match config.subpixel_policy {
            SubpixelPolicy::Strict => Err(DriftError::SubpixelDomain {
                slice: slice_index,
                row,
                col,
                reason,
            }),
            SubpixelPolicy::FallbackToInteger => {
                warn!(
                    slice = slice_index,
                    row, col, %reason,
                    "sub-pixel refinement skipped, keeping integer peak"
                );
                Ok(Displacement {
                    dx: col as f64,
                    dy: row as f64,
                })
            }
        },
    }
}

/// Compute the drift series: one displacement per slice, in stack order.
///
/// Template-vs-slice shapes are validated once up front, so a shape error
/// never yields partial results.
pub fn estimate_drift(
    stack: &ImageStack,
    template: ArrayView2<'_, f32>,
    config: &DriftConfig,
) -> Result<DriftSeries> {
    estimate_drift_with_progress(stack, template, config, |_| {})
}

/// As [`estimate_drift`], invoking `on_slice_done` with the number of
/// completed slices after each one finishes.
pub fn estimate_drift_with_progress<F>(
    stack: &ImageStack,
    template: ArrayView2<'_, f32>,
    config: &DriftConfig,
    on_slice_done: F,
) -> Result<DriftSeries>
where
    F: Fn(usize) + Send + Sync,
{
    let (sh, sw) = stack.slice_dim();
    let (th, tw) = template.dim();
    if th > sh || tw > sw {
        return Err(DriftError::TemplateTooLarge {
            template: (th, tw),
            slice: (sh, sw),
        });
    }

    debug!(
        slices = stack.len(),
        slice_dim = ?(sh, sw),
        template_dim = ?(th, tw),
        method = %config.method,
        subpixel = config.subpixel,
        "estimating drift series"
    );

    let counter = AtomicUsize::new(0);

    let results: Vec<Result<Displacement>> = if stack.len() >= PARALLEL_SLICE_THRESHOLD {
        (0..stack.len())
            .into_par_iter()
            .map(|i| {
                let d = compute_displacement_indexed(stack.slice(i), template, config, i);
                let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
                on_slice_done(done);
                d
            })
            .collect()
    } else {
        (0..stack.len())
            .map(|i| {
                let d = compute_displacement_indexed(stack.slice(i), template, config, i);
                let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
                on_slice_done(done);
                d
            })
            .collect()
    };

    results.into_iter().collect()
}
