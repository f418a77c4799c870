// rcs380-rs/rcs380/src/config.rs

//! Session configuration

use std::time::Duration;

use crate::utils::timeout::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TRANSFER_TIMEOUT_MS, ms};

/// Bytes requested per bulk read. Larger than any frame the reader emits.
pub const DEFAULT_RECEIVE_BUFFER_LEN: usize = 512;

/// Tunables for a [`ReaderSession`](crate::session::ReaderSession).
///
/// The defaults reproduce the reader's reference behaviour: 5 s transfer
/// timeout, 250 ms between sense-requests and no limit on the poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Timeout applied to every bulk write and read
    pub timeout: Duration,
    /// Delay between two sense-requests while no card answers
    pub poll_interval: Duration,
    /// Stop polling after this many sense-requests
    pub max_attempts: Option<u32>,
    /// Stop polling once this much time has passed since polling started
    pub deadline: Option<Duration>,
    /// Verify preamble, checksums and postamble of every response frame
    pub verify_checksums: bool,
    /// Require the reader's intermediate reply to be an ACK frame
    pub validate_ack: bool,
    /// Maximum bytes requested per bulk read
    pub receive_buffer_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: ms(DEFAULT_TRANSFER_TIMEOUT_MS),
            poll_interval: ms(DEFAULT_POLL_INTERVAL_MS),
            max_attempts: None,
            deadline: None,
            verify_checksums: true,
            validate_ack: true,
            receive_buffer_len: DEFAULT_RECEIVE_BUFFER_LEN,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Accept response frames without checking their checksums, trusting
    /// the length reported by the transport.
    pub fn permissive(mut self) -> Self {
        self.verify_checksums = false;
        self.validate_ack = false;
        self
    }
}
