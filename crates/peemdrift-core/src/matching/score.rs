//! Sliding-window scoring kernels for the six match methods.
//!
//! Scores are accumulated in f64. The template statistics (sum of squares,
//! mean, zero-mean sum of squares) are computed once; each window then needs
//! a single pass over its pixels.

use ndarray::{s, Array2, ArrayView2};

use crate::consts::EPSILON;

use super::MatchMethod;

/// Precomputed template statistics shared by all windows.
struct TemplateStats {
    sum_sq: f64,
    mean: f64,
    centered_sum_sq: f64,
}

impl TemplateStats {
    fn compute(template: ArrayView2<'_, f32>) -> Self {
        let n = template.len() as f64;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for &v in template.iter() {
            sum += v as f64;
            sum_sq += (v as f64) * (v as f64);
        }
        let mean = sum / n;
        // Σ(T - mean)² = ΣT² - n·mean²
        let centered_sum_sq = sum_sq - n * mean * mean;
        Self {
            sum_sq,
            mean,
            centered_sum_sq,
        }
    }
}

/// Score every window offset. Caller has validated the shapes.
pub(super) fn score_surface(
    slice: ArrayView2<'_, f32>,
    template: ArrayView2<'_, f32>,
    method: MatchMethod,
) -> Array2<f64> {
    let (sh, sw) = slice.dim();
    let (th, tw) = template.dim();
    let (oh, ow) = (sh - th + 1, sw - tw + 1);

    let stats = TemplateStats::compute(template);
    let mut surface = Array2::<f64>::zeros((oh, ow));

    for r in 0..oh {
        for c in 0..ow {
            let window = slice.slice(s![r..r + th, c..c + tw]);
            surface[[r, c]] = score_window(window, template, &stats, method);
        }
    }

    surface
}

fn score_window(
    window: ArrayView2<'_, f32>,
    template: ArrayView2<'_, f32>,
    stats: &TemplateStats,
    method: MatchMethod,
) -> f64 {
    let n = template.len() as f64;

    let mut win_sum = 0.0f64;
    let mut win_sum_sq = 0.0f64;
    let mut dot = 0.0f64;
    let mut sq_diff = 0.0f64;
    for (&w, &t) in window.iter().zip(template.iter()) {
        let (w, t) = (w as f64, t as f64);
        win_sum += w;
        win_sum_sq += w * w;
        dot += w * t;
        let d = t - w;
        sq_diff += d * d;
    }

    match method {
        MatchMethod::SqDiff => sq_diff,
        MatchMethod::SqDiffNormed => {
            let denom = (stats.sum_sq * win_sum_sq).sqrt();
            if denom < EPSILON {
                // Degenerate all-zero window: report a worst-case score
                // so it never masquerades as a perfect match.
                1.0
            } else {
                sq_diff / denom
            }
        }
        MatchMethod::CrossCorr => dot,
        MatchMethod::CrossCorrNormed => {
            let denom = (stats.sum_sq * win_sum_sq).sqrt();
            if denom < EPSILON {
                0.0
            } else {
                dot / denom
            }
        }
        MatchMethod::CorrCoeff | MatchMethod::CorrCoeffNormed => {
            let win_mean = win_sum / n;
            // Σ(T-mT)(W-mW) = ΣTW - n·mT·mW
            let cov = dot - n * stats.mean * win_mean;
            if method == MatchMethod::CorrCoeff {
                cov
            } else {
                let win_centered_sum_sq = win_sum_sq - n * win_mean * win_mean;
                let denom = (stats.centered_sum_sq * win_centered_sum_sq).sqrt();
                if denom < EPSILON {
                    0.0
                } else {
                    cov / denom
                }
            }
        }
    }
}
