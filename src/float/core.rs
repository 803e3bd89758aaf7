// src/float/core.rs

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::common::FftError;

/// A cosine/sine table pair. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrigTable {
    pub(crate) cos: Vec<f64>,
    pub(crate) sin: Vec<f64>,
}

impl TrigTable {
    /// Bluestein chirp for a size-`n` transform: angle `π·(i² mod 2n)/n`.
    pub(crate) fn chirp(n: usize) -> Self {
        let mut table = Self::with_len(n);
        // Reducing i² modulo 2n before scaling keeps the angle small and exact.
        let period = (n as u128) * 2;
        for i in 0..n {
            let j = ((i as u128) * (i as u128) % period) as f64;
            let (sin, cos) = sin_cos(PI * j / (n as f64));
            table.cos[i] = cos;
            table.sin[i] = sin;
        }
        table
    }

    /// Radix-2 twiddles at resolution `2π/m`, `m/2` entries.
    pub(crate) fn twiddles(m: usize) -> Self {
        let mut table = Self::with_len(m / 2);
        for i in 0..(m / 2) {
            let (sin, cos) = sin_cos(2.0 * PI * (i as f64) / (m as f64));
            table.cos[i] = cos;
            table.sin[i] = sin;
        }
        table
    }

    fn with_len(len: usize) -> Self {
        Self {
            cos: alloc::vec![0.0; len],
            sin: alloc::vec![0.0; len],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.cos.len()
    }

    /// Full circle the table was built for (the `m` of `twiddles(m)`).
    pub(crate) fn resolution(&self) -> usize {
        self.len() * 2
    }
}

/// sin/cos from std when available, libm otherwise.
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Reverses the lowest `bits` bits of `x`.
pub(crate) fn reverse_bits(mut x: usize, bits: u32) -> usize {
    let mut y = 0;
    for _ in 0..bits {
        y = (y << 1) | (x & 1);
        x >>= 1;
    }
    y
}

/// In-place radix-2 decimation-in-time FFT over split real/imaginary buffers.
///
/// Unnormalized forward DFT. The inverse is obtained by swapping `real` and
/// `imag` at the call site; no scaling is applied in either direction.
///
/// The length must be a power of two no larger than `twiddles.resolution()`.
/// Twiddle `k` of a length-`n` pass is read at `k * (resolution / n)`, so one
/// table serves every power-of-two length up to its resolution.
pub(crate) fn radix_2_dit_core(
    real: &mut [f64],
    imag: &mut [f64],
    twiddles: &TrigTable,
) -> Result<(), FftError> {
    let n = real.len();
    if n != imag.len() {
        return Err(FftError::SizeMismatch);
    }
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    if n == 1 {
        return Ok(());
    }
    if n > twiddles.resolution() {
        return Err(FftError::SizeMismatch);
    }
    let levels = n.trailing_zeros();
    let twiddle_stride = twiddles.resolution() / n;

    // 1. Bit-reverse
    for i in 0..n {
        let j = reverse_bits(i, levels);
        if j > i {
            real.swap(i, j);
            imag.swap(i, j);
        }
    }

    // 2. Butterfly
    let cos = &twiddles.cos;
    let sin = &twiddles.sin;
    let mut size = 2;
    while size <= n {
        let halfsize = size / 2;
        let tablestep = (n / size) * twiddle_stride;
        for i in (0..n).step_by(size) {
            for (j, k) in (i..i + halfsize).zip((0..).step_by(tablestep)) {
                let l = j + halfsize;
                let tpre = real[l] * cos[k] + imag[l] * sin[k];
                let tpim = -real[l] * sin[k] + imag[l] * cos[k];
                real[l] = real[j] - tpre;
                imag[l] = imag[j] - tpim;
                real[j] += tpre;
                imag[j] += tpim;
            }
        }
        size *= 2;
    }

    Ok(())
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
