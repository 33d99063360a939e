use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::error::{DriftError, Result};

/// A sequence of 2-D image slices sharing one shape.
/// Pixel values are f32; axis order is (slice, row, col).
#[derive(Clone, Debug)]
pub struct ImageStack {
    data: Array3<f32>,
}

impl ImageStack {
    pub fn new(data: Array3<f32>) -> Result<Self> {
        if data.shape()[0] == 0 {
            return Err(DriftError::EmptyStack);
        }
        Ok(Self { data })
    }

    /// Build a stack from individual slices, verifying they share one shape.
    pub fn from_slices(slices: Vec<Array2<f32>>) -> Result<Self> {
        let first = slices.first().ok_or(DriftError::EmptyStack)?;
        let (h, w) = first.dim();

        let mut data = Array3::<f32>::zeros((slices.len(), h, w));
        for (i, slice) in slices.iter().enumerate() {
            if slice.dim() != (h, w) {
                return Err(DriftError::SliceShapeMismatch {
                    index: i,
                    got: slice.dim(),
                    expected: (h, w),
                });
            }
            data.index_axis_mut(Axis(0), i).assign(slice);
        }
        Ok(Self { data })
    }

    /// Number of slices along the sequence axis.
    pub fn len(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape (rows, cols) shared by every slice.
    pub fn slice_dim(&self) -> (usize, usize) {
        let s = self.data.shape();
        (s[1], s[2])
    }

    pub fn slice(&self, index: usize) -> ArrayView2<'_, f32> {
        self.data.index_axis(Axis(0), index)
    }

    pub fn slices(&self) -> impl Iterator<Item = ArrayView2<'_, f32>> {
        self.data.axis_iter(Axis(0))
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }
}

/// Best-match position of the template within one slice.
/// `dx` counts columns, `dy` counts rows, both from the slice origin to the
/// template's top-left corner; fractional when sub-pixel refinement ran.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

/// One displacement per stack slice, in stack order.
pub type DriftSeries = Vec<Displacement>;
