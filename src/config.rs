//! Basis generation settings.

use crate::error::{checked_dim, checked_len, checked_order, ZernikeError, ZernikeResult};
use crate::ops::modes::{check_max_order, mode_count, ParityConvention};

/// Settings for generating a complete basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasisConfig {
    max_order: u32,
    dim: usize,
    parity: ParityConvention,
    parallel: bool,
}

impl BasisConfig {
    /// Paired parity, parallel evaluation.
    pub fn new(max_order: u32, dim: usize) -> Self {
        Self {
            max_order,
            dim,
            parity: ParityConvention::Paired,
            parallel: true,
        }
    }

    /// Validates signed `od` and `dim` before building the config.
    pub fn from_signed(od: i64, dim: i64) -> ZernikeResult<Self> {
        let max_order = checked_order("od", od)?;
        let dim = checked_dim(dim)?;
        let config = Self::new(max_order, dim);
        config.validate()?;
        Ok(config)
    }

    pub fn with_parity(mut self, parity: ParityConvention) -> Self {
        self.parity = parity;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the order limit, `dim >= 1`, and that the basis fits in memory.
    pub fn validate(&self) -> ZernikeResult<()> {
        check_max_order(self.max_order)?;
        if self.dim == 0 {
            return Err(ZernikeError::invalid("dim", "grid size must be at least 1, got 0"));
        }
        let (modes, rows, cols) = self.shape();
        checked_len("dim", &[modes, rows, cols])?;
        Ok(())
    }

    pub fn max_order(&self) -> u32 {
        self.max_order
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn parity(&self) -> ParityConvention {
        self.parity
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// `(modes, dim, dim)` shape of the generated basis. Only allocatable
    /// once [`BasisConfig::validate`] passes.
    pub fn shape(&self) -> (usize, usize, usize) {
        (mode_count(self.max_order), self.dim, self.dim)
    }
}
