//! Post-processing helpers applied to evaluated fields.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis, Zip};

use crate::error::{ZernikeError, ZernikeResult};
use crate::ops::grid::SampleGrid;

/// Returns a copy of `field` with every sample at `r >= 1` set to zero.
///
/// The evaluator never masks; this is a separate post-processing step.
pub fn mask_unit_disk(field: &ArrayView2<f64>) -> ZernikeResult<Array2<f64>> {
    let (rows, cols) = field.dim();
    if rows != cols {
        return Err(ZernikeError::invalid(
            "field",
            format!("expected a square field, got {}x{}", rows, cols),
        ));
    }
    let grid = SampleGrid::new(rows)?;
    let mut masked = field.to_owned();
    Zip::from(&mut masked)
        .and(grid.radius())
        .for_each(|z, &r| {
            if r >= 1.0 {
                *z = 0.0;
            }
        });
    Ok(masked)
}

/// Applies [`mask_unit_disk`] to every slice of a `(modes, dim, dim)` basis.
pub fn mask_basis(basis: &ArrayView3<f64>) -> ZernikeResult<Array3<f64>> {
    let mut masked = basis.to_owned();
    for mut field in masked.axis_iter_mut(Axis(0)) {
        let disk = mask_unit_disk(&field.view())?;
        field.assign(&disk);
    }
    Ok(masked)
}
