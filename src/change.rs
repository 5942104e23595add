//! Closing-price change arithmetic.
//!
//! Kept free of any provider types so the comparison rule can be tested
//! without a network in sight.

use serde::Serialize;

use crate::core::CbError;

/// Relative change between two closing prices.
///
/// `percent` is always non-negative; the sign of the move lives in `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceChange {
    /// Unsigned percentage change relative to the older close.
    pub percent: f64,
    /// Signed difference, newer minus older.
    pub delta: f64,
}

impl PriceChange {
    /// Which way the newer close moved relative to the older one.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.delta > 0.0 {
            Direction::Up
        } else if self.delta < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

/// Direction of a close-to-close move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Single-character arrow for report rendering.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }
}

/// Computes the unsigned percentage change from `older` to `newer`, keeping
/// the signed delta so the direction stays recoverable.
///
/// # Errors
///
/// Returns [`CbError::ZeroReference`] when `older` is zero; a relative
/// change against a zero baseline is undefined.
pub fn percentage_change(newer: f64, older: f64) -> Result<PriceChange, CbError> {
    if older == 0.0 {
        return Err(CbError::ZeroReference);
    }
    let delta = newer - older;
    Ok(PriceChange {
        percent: (delta.abs() / older.abs()) * 100.0,
        delta,
    })
}
