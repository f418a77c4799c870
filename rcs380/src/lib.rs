// rcs380-rs/rcs380/src/lib.rs

//! rcs380
//!
//! Pure Rust client for the Sony RC-S380 USB NFC reader: frame codec,
//! command catalog and a session that detects one FeliCa or Type-B card.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
