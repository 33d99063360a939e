/// Minimum slice count to use slice-level Rayon parallelism.
pub const PARALLEL_SLICE_THRESHOLD: usize = 4;

/// Small epsilon guarding normalization denominators.
pub const EPSILON: f64 = 1e-12;

/// Numerator of the default-template central-region lower bound (2/5).
pub const TEMPLATE_REGION_LO_NUM: usize = 2;

/// Numerator of the default-template central-region upper bound (3/5).
pub const TEMPLATE_REGION_HI_NUM: usize = 3;

/// Denominator of the default-template central-region bounds.
pub const TEMPLATE_REGION_DEN: usize = 5;

/// Axis label conventionally carrying the slice sequence (pump-probe delay).
pub const DEFAULT_STACK_AXIS: &str = "delay";

/// Axis label conventionally carrying image rows.
pub const DEFAULT_Y_AXIS: &str = "y";

/// Axis label conventionally carrying image columns.
pub const DEFAULT_X_AXIS: &str = "x";
