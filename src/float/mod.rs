pub mod real;
mod bluestein;
mod core;
mod engine;

pub use crate::common::{ FftError, FftProcess };
pub use engine::FftEngine;
pub use real::RealFft;
