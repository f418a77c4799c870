//! Utilities for rcs380: small, reusable helpers used across the crate.
//!
//! Hex formatting for frame logging and identifier display, plus the
//! default timing values.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
