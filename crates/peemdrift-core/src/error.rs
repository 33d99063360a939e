use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Empty image stack")]
    EmptyStack,

    #[error("Slice {index} has shape {got:?}, expected {expected:?}")]
    SliceShapeMismatch {
        index: usize,
        got: (usize, usize),
        expected: (usize, usize),
    },

    #[error("Template {template:?} exceeds slice {slice:?} in at least one dimension")]
    TemplateTooLarge {
        template: (usize, usize),
        slice: (usize, usize),
    },

    #[error("Unknown match method: {0}")]
    UnknownMethod(String),

    #[error("Sub-pixel refinement failed on slice {slice} at peak ({row}, {col}): {reason}")]
    SubpixelDomain {
        slice: usize,
        row: usize,
        col: usize,
        reason: SubpixelFailure,
    },

    #[error("Axis '{0}' not found in dataset")]
    AxisNotFound(String),

    #[error("Axis index {index} out of range (dataset has {ndim} axes)")]
    AxisOutOfRange { index: usize, ndim: usize },

    #[error("Axes {0:?} must be distinct")]
    DuplicateAxes(Vec<usize>),

    #[error("Dataset has {ndim} axes but {labels} labels were given")]
    LabelCountMismatch { labels: usize, ndim: usize },
}

/// Why the log-parabola stencil could not be evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubpixelFailure {
    /// The integer peak sits on the border of the correlation surface.
    BorderPeak,
    /// A stencil value is zero or negative, so its logarithm is undefined.
    NonPositiveValue,
}

impl std::fmt::Display for SubpixelFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BorderPeak => write!(f, "peak on correlation surface border"),
            Self::NonPositiveValue => write!(f, "non-positive correlation value in stencil"),
        }
    }
}

pub type Result<T> = std::result::Result<T, DriftError>;
