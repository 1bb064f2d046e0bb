//! Stacking every mode of a complete basis into one array.

use ndarray::{Array3, Axis};
use rayon::prelude::*;

use crate::config::BasisConfig;
use crate::error::ZernikeResult;
use crate::ops::grid::SampleGrid;
use crate::ops::modes::enumerate_modes_with;
use crate::ops::radial::fill_mode;

/// Evaluates every mode up to `config.max_order()`.
///
/// Slice `k` along axis 0 holds the `k`-th descriptor of the enumeration,
/// whether or not the modes are evaluated in parallel.
pub fn generate_basis(config: &BasisConfig) -> ZernikeResult<Array3<f64>> {
    config.validate()?;
    let modes = enumerate_modes_with(config.max_order(), config.parity())?;
    let grid = SampleGrid::new(config.dim())?;

    log::debug!(
        "generating {} Zernike modes up to order {} on a {}x{} grid (parallel: {})",
        modes.len(),
        config.max_order(),
        config.dim(),
        config.dim(),
        config.parallel()
    );

    let mut basis = Array3::<f64>::zeros(config.shape());
    if config.parallel() {
        basis
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(k, field)| fill_mode(&modes[k], &grid, field));
    } else {
        for (mode, field) in modes.iter().zip(basis.axis_iter_mut(Axis(0))) {
            fill_mode(mode, &grid, field);
        }
    }
    Ok(basis)
}

/// Complete basis up to order `od` on a `dim x dim` grid, shaped
/// `(modes, dim, dim)`.
pub fn zernike_generator(od: i64, dim: i64) -> ZernikeResult<Array3<f64>> {
    generate_basis(&BasisConfig::from_signed(od, dim)?)
}
