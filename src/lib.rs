//! Zernike polynomials sampled on square grids.
//!
//! [`zernike_gen`] evaluates one mode `(n, m, p)`; [`zernike_generator`]
//! stacks every mode up to a maximum radial order in canonical order
//! (ascending `n`, ascending `m`, sine before cosine). With the `python`
//! feature the crate builds as a Python extension module.

pub mod config;
pub mod error;
pub mod ops;

#[cfg(feature = "python")]
pub mod bindings;

pub use config::BasisConfig;
pub use error::{ZernikeError, ZernikeResult};
pub use ops::{
    enumerate_modes, enumerate_modes_with, evaluate_mode, generate_basis, mask_basis,
    mask_unit_disk, mode_count, zernike_gen, zernike_generator, zernike_modes, ModeDescriptor,
    Parity, ParityConvention, SampleGrid, MAX_RADIAL_ORDER,
};
