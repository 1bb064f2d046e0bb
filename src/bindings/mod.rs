mod zernike;

pub use zernike::*;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Zernike basis generation for Python
#[pymodule]
pub fn zernike_basis(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    zernike::register(m)?;
    Ok(())
}
