pub mod peak;
mod score;

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{DriftError, Result};

pub use peak::{min_max_loc, MinMax};

/// Match-scoring function for sliding the template over a slice.
///
/// The six variants follow the classic template-matching family: squared
/// differences, cross-correlation and correlation coefficient, each raw or
/// normalized. Dispatch is a closed enum; there is no string evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMethod {
    #[serde(rename = "sqdiff")]
    SqDiff,
    #[serde(rename = "sqdiff-normed")]
    SqDiffNormed,
    #[serde(rename = "ccorr")]
    CrossCorr,
    #[serde(rename = "ccorr-normed")]
    CrossCorrNormed,
    #[serde(rename = "ccoeff")]
    CorrCoeff,
    #[default]
    #[serde(rename = "ccoeff-normed")]
    CorrCoeffNormed,
}

impl MatchMethod {
    /// Whether the best match is the surface minimum (squared-difference
    /// family) rather than the maximum.
    pub fn is_minimizing(&self) -> bool {
        matches!(self, Self::SqDiff | Self::SqDiffNormed)
    }

    pub const ALL: [MatchMethod; 6] = [
        Self::SqDiff,
        Self::SqDiffNormed,
        Self::CrossCorr,
        Self::CrossCorrNormed,
        Self::CorrCoeff,
        Self::CorrCoeffNormed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SqDiff => "sqdiff",
            Self::SqDiffNormed => "sqdiff-normed",
            Self::CrossCorr => "ccorr",
            Self::CrossCorrNormed => "ccorr-normed",
            Self::CorrCoeff => "ccoeff",
            Self::CorrCoeffNormed => "ccoeff-normed",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchMethod {
    type Err = DriftError;

    fn from_str(s: &str) -> Result<Self> {
        MatchMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| DriftError::UnknownMethod(s.to_string()))
    }
}

/// Slide the template over the slice and score every offset.
///
/// The returned surface has shape `slice_dim - template_dim + 1` per axis;
/// cell `(r, c)` scores the window whose top-left corner is `(r, c)`.
pub fn match_template(
    slice: ArrayView2<'_, f32>,
    template: ArrayView2<'_, f32>,
    method: MatchMethod,
) -> Result<Array2<f64>> {
    let (sh, sw) = slice.dim();
    let (th, tw) = template.dim();
    if th > sh || tw > sw {
        return Err(DriftError::TemplateTooLarge {
            template: (th, tw),
            slice: (sh, sw),
        });
    }
    Ok(score::score_surface(slice, template, method))
}
