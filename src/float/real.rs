use super::engine::FftEngine;
use crate::common::FftError;

/// Forward DFT of a real-valued signal.
///
/// The samples are copied into `real_out` with `imag_out` zero-filled, then
/// transformed with the wrapped [`FftEngine`]. The full `n`-bin spectrum is
/// produced (bins above `n/2` are the conjugate mirror of those below).
#[derive(Debug, Clone, PartialEq)]
pub struct RealFft {
    engine: FftEngine,
}

impl RealFft {
    pub fn new(n: usize) -> Result<Self, FftError> {
        Ok(Self { engine: FftEngine::new(n)? })
    }

    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn engine(&self) -> &FftEngine {
        &self.engine
    }

    /// Spectrum of `samples` into `real_out`/`imag_out`. All three must have length `n`.
    pub fn process(
        &self,
        samples: &[f64],
        real_out: &mut [f64],
        imag_out: &mut [f64],
    ) -> Result<(), FftError> {
        let n = self.len();
        if samples.len() != n || real_out.len() != n || imag_out.len() != n {
            return Err(FftError::SizeMismatch);
        }

        real_out.copy_from_slice(samples);
        imag_out.fill(0.0);
        self.engine.forward(real_out, imag_out)
    }
}

impl From<FftEngine> for RealFft {
    fn from(engine: FftEngine) -> Self {
        Self { engine }
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
