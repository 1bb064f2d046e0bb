//! Square sampling grid over `[-1, 1] x [-1, 1]`.

use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayView2};

use crate::error::{checked_len, ZernikeError, ZernikeResult};

/// Polar coordinates of every sample of a `dim x dim` grid.
///
/// Columns run along `x` from -1 to 1, rows run along `y` from 1 to -1, so
/// row 0 is the top edge. Radii are not clipped at the unit circle.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    dim: usize,
    r: Array2<f64>,
    theta: Array2<f64>,
}

impl SampleGrid {
    pub fn new(dim: usize) -> ZernikeResult<Self> {
        if dim == 0 {
            return Err(ZernikeError::invalid("dim", "grid size must be at least 1, got 0"));
        }
        checked_len("dim", &[dim, dim])?;
        let (x, y) = Self::axes(dim);

        let r = Array2::from_shape_fn((dim, dim), |(i, j)| x[j].hypot(y[i]));
        // Negating both axes before atan2 and shifting by pi puts theta in
        // [0, 2pi), with -0.0 on the positive x axis mapping to exactly 0.
        let theta = Array2::from_shape_fn((dim, dim), |(i, j)| (-y[i]).atan2(-x[j]) + PI);

        Ok(Self { dim, r, theta })
    }

    /// Column (`x`) and row (`y`) coordinates.
    pub fn axes(dim: usize) -> (Array1<f64>, Array1<f64>) {
        (
            Array1::linspace(-1.0, 1.0, dim),
            Array1::linspace(1.0, -1.0, dim),
        )
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn radius(&self) -> ArrayView2<'_, f64> {
        self.r.view()
    }

    pub fn theta(&self) -> ArrayView2<'_, f64> {
        self.theta.view()
    }
}
