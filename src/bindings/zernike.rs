use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::BasisConfig;
use crate::error::ZernikeError;
use crate::ops::{self, ParityConvention};

impl From<ZernikeError> for PyErr {
    fn from(err: ZernikeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Zernike mode (n, m, p) on a dim x dim grid.
#[pyfunction]
#[pyo3(name = "zernike_gen")]
pub fn zernike_gen_py<'py>(
    py: Python<'py>,
    n: i64,
    m: i64,
    p: i64,
    dim: i64,
) -> PyResult<&'py PyArray2<f64>> {
    let field = py.allow_threads(|| ops::zernike_gen(n, m, p, dim))?;
    Ok(field.into_pyarray(py))
}

/// Every mode up to order `od`, shaped (modes, dim, dim).
#[pyfunction]
#[pyo3(signature = (od, dim, legacy_parity = false, parallel = true))]
pub fn zernikegenerator<'py>(
    py: Python<'py>,
    od: i64,
    dim: i64,
    legacy_parity: bool,
    parallel: bool,
) -> PyResult<&'py PyArray3<f64>> {
    let parity = if legacy_parity {
        ParityConvention::Legacy
    } else {
        ParityConvention::Paired
    };
    let config = BasisConfig::from_signed(od, dim)?
        .with_parity(parity)
        .with_parallel(parallel);
    let basis = py.allow_threads(|| ops::generate_basis(&config))?;
    Ok(basis.into_pyarray(py))
}

/// `(n, m, p)` triples of the basis up to order `od`, in basis order.
#[pyfunction]
pub fn zernike_modes(od: i64) -> PyResult<Vec<(u32, u32, u8)>> {
    let modes = ops::zernike_modes(od)?;
    Ok(modes.iter().map(ops::ModeDescriptor::as_tuple).collect())
}

#[pyfunction]
pub fn mask_unit_disk<'py>(
    py: Python<'py>,
    field: PyReadonlyArray2<'py, f64>,
) -> PyResult<&'py PyArray2<f64>> {
    let masked = ops::mask_unit_disk(&field.as_array())?;
    Ok(masked.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(zernike_gen_py, m)?)?;
    m.add_function(wrap_pyfunction!(zernikegenerator, m)?)?;
    m.add_function(wrap_pyfunction!(zernike_modes, m)?)?;
    m.add_function(wrap_pyfunction!(mask_unit_disk, m)?)?;
    Ok(())
}
