// rcs380-rs/rcs380/src/protocol/ack.rs

//! Classification of the reader's low-level reply that precedes every
//! response frame.

use crate::constants::{ACK_FRAME, NACK_FRAME};
use crate::{Error, Result};

/// What the reader sent back right after receiving a command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKind {
    Ack,
    Nack,
    /// Neither of the fixed 6-byte ACK/NACK frames
    Other,
}

impl AckKind {
    pub fn classify(raw: &[u8]) -> Self {
        if raw == ACK_FRAME {
            Self::Ack
        } else if raw == NACK_FRAME {
            Self::Nack
        } else {
            Self::Other
        }
    }
}

/// Fail unless `raw` is exactly the ACK frame.
pub fn expect_ack(raw: &[u8]) -> Result<()> {
    match AckKind::classify(raw) {
        AckKind::Ack => Ok(()),
        AckKind::Nack => Err(Error::Nack),
        AckKind::Other => Err(Error::UnexpectedAck(raw.to_vec())),
    }
}
