// src/float/bluestein.rs
//
// Arbitrary-size DFT by chirp-z reduction to a power-of-two circular convolution.

use alloc::vec;

use super::core::{TrigTable, radix_2_dit_core};
use crate::common::FftError;

/// Computes the DFT of `real`/`imag` in place for any length `n`.
///
/// `chirp` must be the size-`n` chirp table and `twiddles` a power-of-two
/// table whose resolution `m` satisfies `m >= 2n + 1`.
pub(crate) fn bluestein_transform(
    real: &mut [f64],
    imag: &mut [f64],
    chirp: &TrigTable,
    twiddles: &TrigTable,
) -> Result<(), FftError> {
    let n = real.len();
    let m = twiddles.resolution();
    if n != imag.len() || n != chirp.len() || m < 2 * n + 1 {
        return Err(FftError::SizeMismatch);
    }
    let (cos, sin) = (&chirp.cos, &chirp.sin);

    // Input times the conjugate chirp, zero-padded to m.
    let mut areal = vec![0.0; m];
    let mut aimag = vec![0.0; m];
    for i in 0..n {
        areal[i] = real[i] * cos[i] + imag[i] * sin[i];
        aimag[i] = -real[i] * sin[i] + imag[i] * cos[i];
    }

    // Chirp, mirrored around index 0.
    let mut breal = vec![0.0; m];
    let mut bimag = vec![0.0; m];
    if n > 0 {
        breal[0] = cos[0];
        bimag[0] = sin[0];
    }
    for i in 1..n {
        breal[i] = cos[i];
        breal[m - i] = cos[i];
        bimag[i] = sin[i];
        bimag[m - i] = sin[i];
    }

    let mut creal = vec![0.0; m];
    let mut cimag = vec![0.0; m];
    convolve_complex(
        twiddles, &areal, &aimag, &breal, &bimag, &mut creal, &mut cimag,
    )?;

    // Undo the chirp.
    for i in 0..n {
        real[i] = creal[i] * cos[i] + cimag[i] * sin[i];
        imag[i] = -creal[i] * sin[i] + cimag[i] * cos[i];
    }

    Ok(())
}

/// Circular convolution of `x` and `y` into `out`, all of one power-of-two length.
///
/// Inputs are copied, never mutated. The inverse step is the unscaled
/// real/imag swap, so the `1/m` normalization happens here, once.
pub(crate) fn convolve_complex(
    twiddles: &TrigTable,
    xreal: &[f64],
    ximag: &[f64],
    yreal: &[f64],
    yimag: &[f64],
    outreal: &mut [f64],
    outimag: &mut [f64],
) -> Result<(), FftError> {
    let m = xreal.len();
    let lengths = [ximag.len(), yreal.len(), yimag.len(), outreal.len(), outimag.len()];
    if lengths.iter().any(|&len| len != m) {
        return Err(FftError::SizeMismatch);
    }

    let mut xreal = xreal.to_vec();
    let mut ximag = ximag.to_vec();
    let mut yreal = yreal.to_vec();
    let mut yimag = yimag.to_vec();
    radix_2_dit_core(&mut xreal, &mut ximag, twiddles)?;
    radix_2_dit_core(&mut yreal, &mut yimag, twiddles)?;

    for i in 0..m {
        let temp = xreal[i] * yreal[i] - ximag[i] * yimag[i];
        ximag[i] = ximag[i] * yreal[i] + xreal[i] * yimag[i];
        xreal[i] = temp;
    }
    radix_2_dit_core(&mut ximag, &mut xreal, twiddles)?;

    let scale = m as f64;
    for i in 0..m {
        outreal[i] = xreal[i] / scale;
        outimag[i] = ximag[i] / scale;
    }

    Ok(())
}

#[cfg(test)]
#[path = "bluestein_tests.rs"]
mod tests;
