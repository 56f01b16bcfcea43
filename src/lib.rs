//! Turns raw airfoil coordinate listings into clean, resampled, closed profile loops.
//!
//! The pipeline is `airfoil::parse` -> `airfoil::split` -> `airfoil::resample`, chained by
//! `airfoil::process`. Every stage is a pure function over its inputs.

pub mod airfoil;
pub mod algorithms;
pub mod errors;
pub mod serialize;

pub use airfoil::{process, ProcessParams, ProcessedLoop, Profile, Spacing, SplitStrategy};
pub use errors::{ProfileError, Result};
