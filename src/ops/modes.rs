//! Mode descriptors and the canonical enumeration of a complete basis.

use num_integer::Integer;

use crate::error::{checked_order, ZernikeError, ZernikeResult};

/// Angular factor of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Parity {
    /// No angular dependence, only for `m == 0`
    Symmetric = 0,
    /// `-sin(m * theta)`
    Sine = 1,
    /// `cos(m * theta)`
    Cosine = 2,
}

impl Parity {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for Parity {
    type Error = ZernikeError;

    fn try_from(p: i64) -> ZernikeResult<Self> {
        match p {
            0 => Ok(Parity::Symmetric),
            1 => Ok(Parity::Sine),
            2 => Ok(Parity::Cosine),
            _ => Err(ZernikeError::invalid(
                "p",
                format!("must be 0, 1 or 2, got {}", p),
            )),
        }
    }
}

/// How sine/cosine parity is assigned to the nonzero-`m` entries of a basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParityConvention {
    /// Each `(n, m)` pair yields its sine mode followed by its cosine mode.
    #[default]
    Paired,
    /// Parity follows the entry's position in the flattened list:
    /// even index is sine, odd index is cosine. Reproduces bases written
    /// by older generators.
    Legacy,
}

/// Highest radial order accepted. `170!` is the largest factorial that is
/// finite in `f64`.
pub const MAX_RADIAL_ORDER: u32 = 170;

/// A validated `(n, m, p)` triple.
///
/// Invariants: `n <= MAX_RADIAL_ORDER`, `n >= m`, `n - m` even, and
/// `parity == Symmetric` only when `m == 0`. Enumerated descriptors also use
/// `Symmetric` for every `m == 0` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeDescriptor {
    n: u32,
    m: u32,
    parity: Parity,
}

impl ModeDescriptor {
    pub fn new(n: u32, m: u32, parity: Parity) -> ZernikeResult<Self> {
        if n > MAX_RADIAL_ORDER {
            return Err(ZernikeError::invalid(
                "n",
                format!("radial order {} exceeds the maximum of {}", n, MAX_RADIAL_ORDER),
            ));
        }
        if m > n {
            return Err(ZernikeError::invalid(
                "m",
                format!("azimuthal frequency {} exceeds radial order {}", m, n),
            ));
        }
        if (n - m).is_odd() {
            return Err(ZernikeError::invalid(
                "m",
                format!("n - m must be even, got n = {}, m = {}", n, m),
            ));
        }
        if m > 0 && parity == Parity::Symmetric {
            return Err(ZernikeError::invalid(
                "p",
                format!("p = 0 is only valid for m = 0, got m = {}", m),
            ));
        }
        Ok(Self { n, m, parity })
    }

    /// Builds a descriptor from signed integers, as received from callers
    /// outside Rust.
    pub fn from_signed(n: i64, m: i64, p: i64) -> ZernikeResult<Self> {
        let parity = Parity::try_from(p)?;
        let n = checked_order("n", n)?;
        let m = checked_order("m", m)?;
        Self::new(n, m, parity)
    }

    // Callers guarantee the invariants.
    const fn new_unchecked(n: u32, m: u32, parity: Parity) -> Self {
        Self { n, m, parity }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn m(&self) -> u32 {
        self.m
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// `(n, m, p)` with `p` as its integer code.
    pub fn as_tuple(&self) -> (u32, u32, u8) {
        (self.n, self.m, self.parity.code())
    }
}

/// Number of modes in a complete basis up to `max_order`, saturating at
/// `usize::MAX`.
pub fn mode_count(max_order: u32) -> usize {
    let k = u128::from(max_order);
    usize::try_from((k + 1) * (k + 2) / 2).unwrap_or(usize::MAX)
}

pub(crate) fn check_max_order(max_order: u32) -> ZernikeResult<()> {
    if max_order > MAX_RADIAL_ORDER {
        return Err(ZernikeError::invalid(
            "od",
            format!("maximum order {} exceeds {}", max_order, MAX_RADIAL_ORDER),
        ));
    }
    Ok(())
}

/// Canonical descriptor list: ascending `n`, ascending `m`, sine before cosine.
pub fn enumerate_modes(max_order: u32) -> ZernikeResult<Vec<ModeDescriptor>> {
    check_max_order(max_order)?;
    let mut modes = Vec::with_capacity(mode_count(max_order));
    for n in 0..=max_order {
        for m in (0..=n).filter(|m| (n - m).is_even()) {
            if m == 0 {
                modes.push(ModeDescriptor::new_unchecked(n, 0, Parity::Symmetric));
            } else {
                modes.push(ModeDescriptor::new_unchecked(n, m, Parity::Sine));
                modes.push(ModeDescriptor::new_unchecked(n, m, Parity::Cosine));
            }
        }
    }
    Ok(modes)
}

pub fn enumerate_modes_with(
    max_order: u32,
    convention: ParityConvention,
) -> ZernikeResult<Vec<ModeDescriptor>> {
    let modes = enumerate_modes(max_order)?;
    Ok(match convention {
        ParityConvention::Paired => modes,
        ParityConvention::Legacy => modes
            .into_iter()
            .enumerate()
            .map(|(i, mode)| {
                if mode.m == 0 {
                    mode
                } else if i.is_even() {
                    ModeDescriptor::new_unchecked(mode.n, mode.m, Parity::Sine)
                } else {
                    ModeDescriptor::new_unchecked(mode.n, mode.m, Parity::Cosine)
                }
            })
            .collect(),
    })
}

/// Signed entry point: fails on `od < 0`.
pub fn zernike_modes(od: i64) -> ZernikeResult<Vec<ModeDescriptor>> {
    enumerate_modes(checked_order("od", od)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuples(modes: &[ModeDescriptor]) -> Vec<(u32, u32, u8)> {
        modes.iter().map(ModeDescriptor::as_tuple).collect()
    }

    #[test]
    fn test_order_one_ordering() {
        assert_eq!(
            tuples(&enumerate_modes(1).unwrap()),
            vec![(0, 0, 0), (1, 1, 1), (1, 1, 2)]
        );
    }

    #[test]
    fn test_order_three_ordering() {
        assert_eq!(
            tuples(&enumerate_modes(3).unwrap()),
            vec![
                (0, 0, 0),
                (1, 1, 1),
                (1, 1, 2),
                (2, 0, 0),
                (2, 2, 1),
                (2, 2, 2),
                (3, 1, 1),
                (3, 1, 2),
                (3, 3, 1),
                (3, 3, 2),
            ]
        );
    }

    #[test]
    fn test_mode_count_matches_enumeration() {
        for k in 0..=12 {
            assert_eq!(enumerate_modes(k).unwrap().len(), mode_count(k), "order {}", k);
        }
        assert_eq!(mode_count(1), 3);
        assert_eq!(mode_count(2), 6);
        assert_eq!(enumerate_modes(MAX_RADIAL_ORDER).unwrap().len(), mode_count(MAX_RADIAL_ORDER));
    }

    #[test]
    fn test_mode_count_saturates() {
        assert!(mode_count(u32::MAX) > 0);
    }

    #[test]
    fn test_enumeration_rejects_orders_above_limit() {
        assert!(enumerate_modes(MAX_RADIAL_ORDER + 1).is_err());
        assert!(enumerate_modes(u32::MAX).is_err());
        assert!(enumerate_modes_with(u32::MAX, ParityConvention::Legacy).is_err());
        assert!(zernike_modes(i64::from(MAX_RADIAL_ORDER) + 1).is_err());
    }

    #[test]
    fn test_enumerated_modes_hold_invariants() {
        for mode in enumerate_modes(10).unwrap() {
            assert!(mode.n() >= mode.m());
            assert!((mode.n() - mode.m()).is_even());
            assert_eq!(mode.parity() == Parity::Symmetric, mode.m() == 0);
            assert_eq!(
                ModeDescriptor::new(mode.n(), mode.m(), mode.parity()),
                Ok(mode)
            );
        }
    }

    #[test]
    fn test_legacy_parity_swaps_odd_positions() {
        // Order-1 pair starts at index 1, so the legacy rule flips it.
        assert_eq!(
            tuples(&enumerate_modes_with(2, ParityConvention::Legacy).unwrap()),
            vec![(0, 0, 0), (1, 1, 2), (1, 1, 1), (2, 0, 0), (2, 2, 1), (2, 2, 2)]
        );
    }

    #[test]
    fn test_legacy_order_six_table() {
        // Output of the historical two-pass generator for od = 6.
        let expected = vec![
            (0, 0, 0),
            (1, 1, 2),
            (1, 1, 1),
            (2, 0, 0),
            (2, 2, 1),
            (2, 2, 2),
            (3, 1, 1),
            (3, 1, 2),
            (3, 3, 1),
            (3, 3, 2),
            (4, 0, 0),
            (4, 2, 2),
            (4, 2, 1),
            (4, 4, 2),
            (4, 4, 1),
            (5, 1, 2),
            (5, 1, 1),
            (5, 3, 2),
            (5, 3, 1),
            (5, 5, 2),
            (5, 5, 1),
            (6, 0, 0),
            (6, 2, 1),
            (6, 2, 2),
            (6, 4, 1),
            (6, 4, 2),
            (6, 6, 1),
            (6, 6, 2),
        ];
        let legacy = enumerate_modes_with(6, ParityConvention::Legacy).unwrap();
        assert_eq!(tuples(&legacy), expected);
        // Every lower order is a prefix of the same table.
        for od in 0..6 {
            let lower = enumerate_modes_with(od, ParityConvention::Legacy).unwrap();
            assert_eq!(tuples(&lower), expected[..mode_count(od)].to_vec());
        }
        assert_eq!(
            enumerate_modes_with(6, ParityConvention::Paired).unwrap(),
            enumerate_modes(6).unwrap()
        );
    }

    #[test]
    fn test_descriptor_validation() {
        assert!(ModeDescriptor::new(1, 2, Parity::Sine).is_err());
        assert!(ModeDescriptor::new(3, 0, Parity::Symmetric).is_err());
        assert!(ModeDescriptor::new(2, 2, Parity::Symmetric).is_err());
        assert!(ModeDescriptor::new(4, 2, Parity::Cosine).is_ok());
        assert!(matches!(
            ModeDescriptor::from_signed(2, 2, 3),
            Err(ZernikeError::InvalidParameter { name: "p", .. })
        ));
        assert!(ModeDescriptor::from_signed(-1, 0, 0).is_err());
        assert!(ModeDescriptor::from_signed(2, -2, 1).is_err());
    }

    #[test]
    fn test_angular_parity_allowed_for_m_zero() {
        assert!(ModeDescriptor::new(2, 0, Parity::Sine).is_ok());
        assert!(ModeDescriptor::new(2, 0, Parity::Cosine).is_ok());
        assert!(ModeDescriptor::from_signed(0, 0, 2).is_ok());
    }

    #[test]
    fn test_radial_order_limit() {
        assert!(ModeDescriptor::new(MAX_RADIAL_ORDER, 0, Parity::Symmetric).is_ok());
        assert!(matches!(
            ModeDescriptor::new(MAX_RADIAL_ORDER + 2, 0, Parity::Symmetric),
            Err(ZernikeError::InvalidParameter { name: "n", .. })
        ));
        assert!(ModeDescriptor::new(u32::MAX, u32::MAX, Parity::Cosine).is_err());
    }

    #[test]
    fn test_zernike_modes_rejects_negative_order() {
        assert!(zernike_modes(-1).is_err());
        assert_eq!(zernike_modes(0).map(|m| tuples(&m)), Ok(vec![(0, 0, 0)]));
    }
}
