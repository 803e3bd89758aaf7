// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Transform size is negative or too large to derive a convolution length.
    InvalidSize,
    /// Buffer lengths disagree with each other or with the configured size.
    SizeMismatch,
    NotPowerOfTwo,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize => write!(f, "Transform size must be non-negative and representable"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
        }
    }
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Smallest power of two `m` with `m >= 2n + 1`, the Bluestein convolution length.
///
/// Returns `None` when that length does not fit in a `usize`.
pub fn convolution_len(n: usize) -> Option<usize> {
    n.checked_mul(2)?.checked_add(1)?.checked_next_power_of_two()
}
