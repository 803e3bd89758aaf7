#![no_std]

extern crate alloc;

// std is linked for tests, and for the Error impl when the "std" feature is on.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;

pub use common::{FftError, FftProcess};
pub use float::{FftEngine, RealFft};
