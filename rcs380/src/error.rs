// rcs380-rs/rcs380/src/error.rs

use thiserror::Error;

use crate::types::CommandRole;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found: {vendor_id:04x}/{product_id:04x}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    // USB 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("{command} exchange failed: {source}")]
    ExchangeFailed {
        command: CommandRole,
        #[source]
        source: Box<Error>,
    },

    #[error("unsupported card technology: {0:?}")]
    UnsupportedTechnology(String),

    #[error("payload too large: max {max} bytes, got {actual}")]
    Encoding { max: usize, actual: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("reader answered with NACK")]
    Nack,

    #[error("expected ACK frame, got {0:02x?}")]
    UnexpectedAck(Vec<u8>),

    #[error("polling failed: no card detected after {attempts} attempt(s)")]
    PollingFailed { attempts: u32 },

    #[error("polling cancelled")]
    Cancelled,

    #[error("reader session already closed")]
    SessionClosed,

    #[error("reader session already detected a card")]
    AlreadyDetected,
}

impl Error {
    /// True for errors raised while validating a received frame's structure
    /// or checksums.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Self::ChecksumMismatch { .. } | Self::FrameFormat(_) | Self::InvalidLength { .. }
        )
    }

    /// True for USB-layer failures, including those wrapped by an exchange.
    pub fn is_transport(&self) -> bool {
        match self {
            #[cfg(feature = "usb")]
            Self::Usb(_) => true,
            Self::Transport(_) | Self::Timeout => true,
            Self::ExchangeFailed { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    pub(crate) fn exchange(command: CommandRole, source: Error) -> Self {
        Self::ExchangeFailed {
            command,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
