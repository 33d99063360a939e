//! Minimal labeled multi-axis container.
//!
//! Measurement runs arrive as N-dimensional count arrays whose axes carry
//! physical meaning (pump-probe delay, spatial x/y, energy, ...). Drift
//! estimation only needs a `(sequence, y, x)` view; [`LabeledStack`]
//! resolves axes by label or position and projects the rest away by
//! summation, the projection semantics of the surrounding toolkit.

use ndarray::{Array2, ArrayD, Axis, Ix2, Ix3};

use crate::consts::{DEFAULT_STACK_AXIS, DEFAULT_X_AXIS, DEFAULT_Y_AXIS};
use crate::error::{DriftError, Result};
use crate::stack::ImageStack;

/// Axis reference, either positional or by label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisSelector {
    Index(usize),
    Label(String),
}

impl From<usize> for AxisSelector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for AxisSelector {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

/// An N-dimensional count array with one label per axis.
#[derive(Clone, Debug)]
pub struct LabeledStack {
    data: ArrayD<f32>,
    labels: Vec<String>,
}

impl LabeledStack {
    pub fn new(data: ArrayD<f32>, labels: Vec<String>) -> Result<Self> {
        if labels.len() != data.ndim() {
            return Err(DriftError::LabelCountMismatch {
                labels: labels.len(),
                ndim: data.ndim(),
            });
        }
        Ok(Self { data, labels })
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn data(&self) -> &ArrayD<f32> {
        &self.data
    }

    /// Resolve a selector to a positional axis index.
    pub fn axis_index(&self, selector: &AxisSelector) -> Result<usize> {
        match selector {
            AxisSelector::Index(i) => {
                if *i < self.ndim() {
                    Ok(*i)
                } else {
                    Err(DriftError::AxisOutOfRange {
                        index: *i,
                        ndim: self.ndim(),
                    })
                }
            }
            AxisSelector::Label(label) => self
                .labels
                .iter()
                .position(|l| l == label)
                .ok_or_else(|| DriftError::AxisNotFound(label.clone())),
        }
    }

    /// Project onto the conventional `delay`/`y`/`x` axes.
    pub fn project_default(&self) -> Result<ImageStack> {
        self.project_stack(
            &DEFAULT_STACK_AXIS.into(),
            &DEFAULT_Y_AXIS.into(),
            &DEFAULT_X_AXIS.into(),
        )
    }

    /// Project onto `(stack, y, x)`: sum over every other axis, then order
    /// the kept axes as requested.
    pub fn project_stack(
        &self,
        stack_axis: &AxisSelector,
        y_axis: &AxisSelector,
        x_axis: &AxisSelector,
    ) -> Result<ImageStack> {
        let keep = [
            self.axis_index(stack_axis)?,
            self.axis_index(y_axis)?,
            self.axis_index(x_axis)?,
        ];
        let reduced = self.sum_onto(&keep)?;

        let order = kept_order(&keep);
        let cube = reduced
            .permuted_axes(order.as_slice())
            .into_dimensionality::<Ix3>()
            .expect("projection kept exactly three axes");
        ImageStack::new(cube.as_standard_layout().to_owned())
    }

    /// Project onto `(y, x)`, as used for template datasets.
    pub fn project_template(
        &self,
        y_axis: &AxisSelector,
        x_axis: &AxisSelector,
    ) -> Result<Array2<f32>> {
        let keep = [self.axis_index(y_axis)?, self.axis_index(x_axis)?];
        let reduced = self.sum_onto(&keep)?;

        let order = kept_order(&keep);
        let plane = reduced
            .permuted_axes(order.as_slice())
            .into_dimensionality::<Ix2>()
            .expect("projection kept exactly two axes");
        Ok(plane.as_standard_layout().to_owned())
    }

    /// Sum over every axis not in `keep`. The result's axes are the kept
    /// ones, in their original relative order.
    fn sum_onto(&self, keep: &[usize]) -> Result<ArrayD<f32>> {
        let mut sorted = keep.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != keep.len() {
            return Err(DriftError::DuplicateAxes(keep.to_vec()));
        }

        let mut reduced = self.data.clone();
        for ax in (0..self.ndim()).rev() {
            if !keep.contains(&ax) {
                reduced = reduced.sum_axis(Axis(ax));
            }
        }
        Ok(reduced)
    }
}

/// Permutation mapping the surviving axes (sorted order after summation)
/// to the requested output order.
fn kept_order(keep: &[usize]) -> Vec<usize> {
    let mut sorted = keep.to_vec();
    sorted.sort_unstable();
    keep.iter()
        .map(|k| sorted.iter().position(|s| s == k).unwrap())
        .collect()
}
