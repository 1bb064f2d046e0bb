//! Evaluation of a single Zernike mode on a sampling grid.

use ndarray::{Array2, ArrayViewMut2, Zip};

use crate::error::{checked_dim, ZernikeResult};
use crate::ops::grid::SampleGrid;
use crate::ops::modes::{ModeDescriptor, Parity};

/// `k!` as a float.
pub(crate) fn factorial(k: u32) -> f64 {
    (1..=k).map(f64::from).product()
}

/// `(coefficient, power)` terms of the radial polynomial `R(n, m)`, in
/// ascending `s`. Needs `m <= n <= MAX_RADIAL_ORDER`, so every factorial
/// stays finite.
pub(crate) fn radial_terms(n: u32, m: u32) -> Vec<(f64, i32)> {
    let half_sum = (n + m) / 2;
    let half_diff = (n - m) / 2;
    (0..=half_diff)
        .map(|s| {
            let sign = if s % 2 == 0 { 1.0 } else { -1.0 };
            let coeff = sign * factorial(n - s)
                / (factorial(s) * factorial(half_sum - s) * factorial(half_diff - s));
            (coeff, (n - 2 * s) as i32)
        })
        .collect()
}

/// `R(n, m)` at radius `r`.
pub(crate) fn radial_value(terms: &[(f64, i32)], r: f64) -> f64 {
    terms
        .iter()
        .fold(0.0, |acc, &(coeff, power)| acc + coeff * r.powi(power))
}

/// Writes the mode sampled on `grid` into `out`.
///
/// `out` must have the grid's shape.
pub fn fill_mode(mode: &ModeDescriptor, grid: &SampleGrid, out: ArrayViewMut2<'_, f64>) {
    let n = mode.n();
    let m = f64::from(mode.m());
    let terms = radial_terms(n, mode.m());
    let norm = f64::from(n + 1).sqrt();
    let norm2 = (2.0 * f64::from(n + 1)).sqrt();

    let zip = Zip::from(out).and(grid.radius()).and(grid.theta());
    match mode.parity() {
        Parity::Symmetric => zip.for_each(|z, &r, _| *z = norm * radial_value(&terms, r)),
        Parity::Sine => zip.for_each(|z, &r, &theta| {
            *z = -norm2 * radial_value(&terms, r) * (m * theta).sin()
        }),
        Parity::Cosine => zip.for_each(|z, &r, &theta| {
            *z = norm2 * radial_value(&terms, r) * (m * theta).cos()
        }),
    }
}

pub fn evaluate_on_grid(mode: &ModeDescriptor, grid: &SampleGrid) -> Array2<f64> {
    let mut field = Array2::zeros((grid.dim(), grid.dim()));
    fill_mode(mode, grid, field.view_mut());
    field
}

pub fn evaluate_mode(mode: &ModeDescriptor, dim: usize) -> ZernikeResult<Array2<f64>> {
    let grid = SampleGrid::new(dim)?;
    log::trace!("evaluating mode {:?} on a {}x{} grid", mode.as_tuple(), dim, dim);
    Ok(evaluate_on_grid(mode, &grid))
}

/// Zernike mode `(n, m, p)` sampled on a `dim x dim` grid.
///
/// `p = 0` is the rotationally symmetric term (`m` must be 0), `p = 1` the
/// sine term and `p = 2` the cosine term. Points outside the unit disk are
/// evaluated too.
pub fn zernike_gen(n: i64, m: i64, p: i64, dim: i64) -> ZernikeResult<Array2<f64>> {
    let mode = ModeDescriptor::from_signed(n, m, p)?;
    evaluate_mode(&mode, checked_dim(dim)?)
}
