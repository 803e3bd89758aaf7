use alloc::vec::Vec;
use num_complex::Complex64;

use super::bluestein::{bluestein_transform, convolve_complex};
use super::core::{TrigTable, radix_2_dit_core};
use crate::common::{FftError, FftProcess, convolution_len};

/// DFT engine for one fixed size `n`, any `n >= 0`.
///
/// Holds the Bluestein chirp table (length `n`) and the radix-2 twiddle table
/// for the convolution length `m`, the smallest power of two `>= 2n + 1`.
/// Both are built once in [`FftEngine::new`] and only read afterwards, so a
/// single engine can be shared between threads as long as each call brings
/// its own buffers.
///
/// Power-of-two sizes run the radix-2 transform directly; every other size
/// goes through Bluestein's convolution.
#[derive(Debug, Clone, PartialEq)]
pub struct FftEngine {
    n: usize,
    m: usize,
    chirp: TrigTable,
    twiddles: TrigTable,
}

impl FftEngine {
    /// Precomputes the tables for a size-`n` transform.
    ///
    /// `n == 0` is allowed and yields an identity transform. Fails with
    /// [`FftError::InvalidSize`] if the convolution length overflows `usize`.
    pub fn new(n: usize) -> Result<Self, FftError> {
        let m = convolution_len(n).ok_or(FftError::InvalidSize)?;
        let engine = Self {
            n,
            m,
            chirp: TrigTable::chirp(n),
            twiddles: TrigTable::twiddles(m),
        };

        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "fft engine: n={} m={} path={}",
            n,
            m,
            match n {
                0 => "identity",
                _ if engine.is_power_of_two() => "radix2",
                _ => "bluestein",
            }
        );

        Ok(engine)
    }

    /// The configured transform size `n`.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The Bluestein convolution length `m`.
    pub fn convolution_len(&self) -> usize {
        self.m
    }

    /// Whether [`forward`](Self::forward) takes the radix-2 path.
    pub fn is_power_of_two(&self) -> bool {
        self.n.is_power_of_two()
    }

    /// Forward DFT of `real`/`imag` in place. Both must have length `n`.
    pub fn forward(&self, real: &mut [f64], imag: &mut [f64]) -> Result<(), FftError> {
        if real.len() != self.n || imag.len() != self.n {
            return Err(FftError::SizeMismatch);
        }
        if self.n == 0 {
            return Ok(());
        }
        if self.is_power_of_two() {
            radix_2_dit_core(real, imag, &self.twiddles)
        } else {
            bluestein_transform(real, imag, &self.chirp, &self.twiddles)
        }
    }

    /// Inverse DFT of `real`/`imag` in place, **without** the `1/n` factor.
    ///
    /// Runs [`forward`](Self::forward) with the two components swapped, which
    /// conjugates the transform. Divide every sample by `n` afterwards to get
    /// the true inverse.
    pub fn inverse(&self, real: &mut [f64], imag: &mut [f64]) -> Result<(), FftError> {
        self.forward(imag, real)
    }

    /// Radix-2 transform of an arbitrary power-of-two length, using this
    /// engine's twiddle table.
    ///
    /// The length may be any power of two up to `m`. Fails with
    /// [`FftError::NotPowerOfTwo`] otherwise (zero included), or
    /// [`FftError::SizeMismatch`] for mismatched or over-long buffers.
    pub fn radix2(&self, real: &mut [f64], imag: &mut [f64]) -> Result<(), FftError> {
        radix_2_dit_core(real, imag, &self.twiddles)
    }

    /// Circular convolution of `x` and `y` into `out`, each of length `m`.
    ///
    /// Output is normalized; the inputs are left untouched.
    pub fn convolve(
        &self,
        xreal: &[f64],
        ximag: &[f64],
        yreal: &[f64],
        yimag: &[f64],
        outreal: &mut [f64],
        outimag: &mut [f64],
    ) -> Result<(), FftError> {
        if xreal.len() != self.m {
            return Err(FftError::SizeMismatch);
        }
        convolve_complex(
            &self.twiddles,
            xreal,
            ximag,
            yreal,
            yimag,
            outreal,
            outimag,
        )
    }
}

impl TryFrom<i64> for FftEngine {
    type Error = FftError;

    /// Signed entry point: negative sizes are rejected with [`FftError::InvalidSize`].
    fn try_from(n: i64) -> Result<Self, FftError> {
        let n = usize::try_from(n).map_err(|_| FftError::InvalidSize)?;
        Self::new(n)
    }
}

impl TryFrom<isize> for FftEngine {
    type Error = FftError;

    fn try_from(n: isize) -> Result<Self, FftError> {
        let n = usize::try_from(n).map_err(|_| FftError::InvalidSize)?;
        Self::new(n)
    }
}

// Complex buffers go through split scratch copies; `inverse` stays unscaled.
impl FftProcess<Complex64> for FftEngine {
    fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        let mut real: Vec<f64> = buffer.iter().map(|c| c.re).collect();
        let mut imag: Vec<f64> = buffer.iter().map(|c| c.im).collect();
        if inverse {
            self.inverse(&mut real, &mut imag)?;
        } else {
            self.forward(&mut real, &mut imag)?;
        }

        for (sample, (&re, &im)) in buffer.iter_mut().zip(real.iter().zip(imag.iter())) {
            *sample = Complex64::new(re, im);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
