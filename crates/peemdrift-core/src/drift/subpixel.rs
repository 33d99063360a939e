use ndarray::ArrayView2;

use crate::error::SubpixelFailure;

/// Refine a peak location using a separable log-parabola on the 5-point
/// stencil around the integer peak.
///
/// Fits `ln S` with a 1-D parabola per axis, which is exact when the peak
/// is Gaussian-shaped. Returns the refined `(row, col)` location, or the
/// reason the stencil could not be evaluated: the peak must not sit on the
/// surface border, and all five stencil values must be strictly positive
/// for the logarithm to exist. The same vertex formula locates minima
/// (squared-difference surfaces) and maxima alike.
pub fn refine_peak_log_parabola(
    surface: ArrayView2<'_, f64>,
    peak_row: usize,
    peak_col: usize,
) -> Result<(f64, f64), SubpixelFailure> {
    let (h, w) = surface.dim();

    if peak_row == 0 || peak_row + 1 >= h || peak_col == 0 || peak_col + 1 >= w {
        return Err(SubpixelFailure::BorderPeak);
    }

    let center = surface[[peak_row, peak_col]];
    let up = surface[[peak_row - 1, peak_col]];
    let down = surface[[peak_row + 1, peak_col]];
    let left = surface[[peak_row, peak_col - 1]];
    let right = surface[[peak_row, peak_col + 1]];

    if center <= 0.0 || up <= 0.0 || down <= 0.0 || left <= 0.0 || right <= 0.0 {
        return Err(SubpixelFailure::NonPositiveValue);
    }

    let row = peak_row as f64 + vertex_offset(up.ln(), center.ln(), down.ln());
    let col = peak_col as f64 + vertex_offset(left.ln(), center.ln(), right.ln());

    Ok((row, col))
}

/// Vertex of the parabola through log-values at -1, 0, +1. A flat stencil
/// has no curvature to fit; the offset is zero there.
fn vertex_offset(prev: f64, center: f64, next: f64) -> f64 {
    let denom = 2.0 * prev + 2.0 * next - 4.0 * center;
    if denom.abs() < 1e-12 {
        0.0
    } else {
        (prev - next) / denom
    }
}
