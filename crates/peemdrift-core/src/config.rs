use serde::{Deserialize, Serialize};

use crate::matching::MatchMethod;

/// Drift-estimation settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Match-scoring function.
    #[serde(default)]
    pub method: MatchMethod,
    /// Refine the integer peak to sub-pixel precision.
    #[serde(default = "default_subpixel")]
    pub subpixel: bool,
    /// What to do when sub-pixel refinement cannot be evaluated.
    #[serde(default)]
    pub subpixel_policy: SubpixelPolicy,
}

fn default_subpixel() -> bool {
    true
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            method: MatchMethod::default(),
            subpixel: true,
            subpixel_policy: SubpixelPolicy::default(),
        }
    }
}

/// Policy for peaks where the log-parabola stencil is undefined, either
/// because the peak sits on the surface border or because a stencil value
/// is non-positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubpixelPolicy {
    /// Fail the whole series with an error naming the offending slice.
    #[default]
    Strict,
    /// Keep the unrefined integer peak for that slice.
    FallbackToInteger,
}
