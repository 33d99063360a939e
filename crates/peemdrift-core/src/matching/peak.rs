use ndarray::ArrayView2;

/// Global minimum and maximum of a correlation surface, with locations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax {
    pub min_val: f64,
    pub max_val: f64,
    /// (row, col) of the minimum.
    pub min_loc: (usize, usize),
    /// (row, col) of the maximum.
    pub max_loc: (usize, usize),
}

/// Locate the global extrema in one row-major scan.
///
/// Ties resolve to the first occurrence in scan order; comparisons are
/// strict, so an equal later value never replaces an earlier one.
pub fn min_max_loc(surface: ArrayView2<'_, f64>) -> MinMax {
    let (h, w) = surface.dim();
    let mut out = MinMax {
        min_val: f64::INFINITY,
        max_val: f64::NEG_INFINITY,
        min_loc: (0, 0),
        max_loc: (0, 0),
    };

    for r in 0..h {
        for c in 0..w {
            let v = surface[[r, c]];
            if v < out.min_val {
                out.min_val = v;
                out.min_loc = (r, c);
            }
            if v > out.max_val {
                out.max_val = v;
                out.max_loc = (r, c);
            }
        }
    }

    out
}
