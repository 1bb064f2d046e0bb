//! Error types shared by the evaluator, the enumerator and the bindings.

use thiserror::Error;

/// Result type for Zernike operations
pub type ZernikeResult<T> = Result<T, ZernikeError>;

/// Errors raised while validating Zernike inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZernikeError {
    /// An argument is outside the domain of the operation
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ZernikeError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ZernikeError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Converts a signed grid size into a sample count (`dim >= 1`).
pub(crate) fn checked_dim(dim: i64) -> ZernikeResult<usize> {
    if dim < 1 {
        return Err(ZernikeError::invalid(
            "dim",
            format!("grid size must be at least 1, got {}", dim),
        ));
    }
    usize::try_from(dim)
        .map_err(|_| ZernikeError::invalid("dim", format!("grid size {} does not fit in memory", dim)))
}

/// Converts a signed order or frequency into an unsigned one.
pub(crate) fn checked_order(name: &'static str, value: i64) -> ZernikeResult<u32> {
    if value < 0 {
        return Err(ZernikeError::invalid(
            name,
            format!("must be non-negative, got {}", value),
        ));
    }
    u32::try_from(value).map_err(|_| ZernikeError::invalid(name, format!("{} is too large", value)))
}

/// Number of `f64` elements in an array of shape `dims`, failing when the
/// count or its byte size does not fit an allocation.
pub(crate) fn checked_len(name: &'static str, dims: &[usize]) -> ZernikeResult<usize> {
    let too_large = || ZernikeError::invalid(name, format!("array of shape {:?} is too large", dims));
    let len = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(too_large)?;
    let bytes = len
        .checked_mul(std::mem::size_of::<f64>())
        .ok_or_else(too_large)?;
    if bytes > isize::MAX as usize {
        return Err(too_large());
    }
    Ok(len)
}
