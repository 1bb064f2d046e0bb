pub mod basis;
pub mod grid;
pub mod modes;
pub mod radial;
pub mod utils;

pub use self::basis::{generate_basis, zernike_generator};
pub use self::grid::SampleGrid;
pub use self::modes::{
    enumerate_modes, enumerate_modes_with, mode_count, zernike_modes, ModeDescriptor, Parity,
    ParityConvention, MAX_RADIAL_ORDER,
};
pub use self::radial::{evaluate_mode, evaluate_on_grid, zernike_gen};
pub use self::utils::{mask_basis, mask_unit_disk};
