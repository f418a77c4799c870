//! Timeout helpers used across the crate.
//!
//! They centralize the reader's default timing values and provide a small
//! conversion helper so tests and code can express timeouts in milliseconds.

use std::time::Duration;

/// Per-transfer bulk timeout in milliseconds.
pub const DEFAULT_TRANSFER_TIMEOUT_MS: u64 = 5000;

/// Delay between sense-requests while no card is present, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
