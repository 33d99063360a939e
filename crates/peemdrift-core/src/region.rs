//! Default-template heuristic: the central 2/5–3/5 window of a reference
//! slice. Structures worth tracking usually sit near the field-of-view
//! center, and a template well inside the slice leaves the matcher room to
//! move in every direction.

use ndarray::{s, Array2, ArrayView2};

use crate::consts::{TEMPLATE_REGION_DEN, TEMPLATE_REGION_HI_NUM, TEMPLATE_REGION_LO_NUM};
use crate::stack::ImageStack;

/// Half-open bounds `[lo, hi)` of the central region along one axis,
/// with floor division: `lo = dim*2/5`, `hi = dim*3/5`.
pub fn central_region_bounds(dim: usize) -> (usize, usize) {
    (
        dim * TEMPLATE_REGION_LO_NUM / TEMPLATE_REGION_DEN,
        dim * TEMPLATE_REGION_HI_NUM / TEMPLATE_REGION_DEN,
    )
}

/// Cut the central-region template out of a slice.
pub fn default_template(slice: ArrayView2<'_, f32>) -> Array2<f32> {
    let (h, w) = slice.dim();
    let (r_lo, r_hi) = central_region_bounds(h);
    let (c_lo, c_hi) = central_region_bounds(w);
    slice.slice(s![r_lo..r_hi, c_lo..c_hi]).to_owned()
}

/// Derive the default template from the stack's first slice.
pub fn default_template_from_stack(stack: &ImageStack) -> Array2<f32> {
    default_template(stack.slice(0))
}
