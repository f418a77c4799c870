// rcs380-rs/rcs380/src/protocol/frame.rs

use crate::constants::{
    FRAME_HEADER_LEN, FRAME_OVERHEAD, FRAME_POSTAMBLE, FRAME_PREAMBLE, MAX_PAYLOAD_LEN,
};
use crate::protocol::checksum::{checksum, lcs};
use crate::protocol::parser;
use crate::{Error, Result};

/// RC-S380 wire frame.
///
/// Format: [Preamble(5)] [Len(2, LE)] [LCS(1)] [Direction(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF 0xFF 0xFF
/// Postamble: 0x00
///
/// `Len` counts the direction byte plus the payload; `DCS` covers the same
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub direction: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(direction: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            direction,
            payload: payload.into(),
        }
    }

    /// Encode a payload into a full wire frame
    pub fn encode(direction: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::Encoding {
                max: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + 1) as u16;
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&FRAME_PREAMBLE);
        out.extend_from_slice(&len.to_le_bytes());
        out.push(lcs(len));
        out.push(direction);
        out.extend_from_slice(payload);
        out.push(checksum(direction, payload));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode a full wire frame, validating preamble, both checksums, the
    /// declared length and the postamble.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        parser::ensure_len(raw, FRAME_OVERHEAD)?;

        if raw[..FRAME_PREAMBLE.len()] != FRAME_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = parser::le_u16_at(raw, FRAME_PREAMBLE.len())?;
        let lcs_actual = raw[FRAME_HEADER_LEN - 1];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }
        if len == 0 {
            return Err(Error::FrameFormat("missing direction byte".into()));
        }

        let body_end = FRAME_HEADER_LEN + len as usize;
        let required_len = body_end + 2;
        if raw.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: raw.len(),
            });
        }

        let direction = raw[FRAME_HEADER_LEN];
        let payload = &raw[FRAME_HEADER_LEN + 1..body_end];

        let dcs_actual = raw[body_end];
        let dcs_expected = checksum(direction, payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if raw[body_end + 1] != FRAME_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(Self::new(direction, payload))
    }

    /// Permissive decode: trusts the length reported by the transport and
    /// strips the fixed header and trailer without checking any checksum.
    /// Only the minimum frame length is enforced.
    pub fn decode_unchecked(raw: &[u8]) -> Result<Self> {
        parser::ensure_len(raw, FRAME_OVERHEAD)?;
        let direction = raw[FRAME_HEADER_LEN];
        let payload = &raw[FRAME_HEADER_LEN + 1..raw.len() - 2];
        Ok(Self::new(direction, payload))
    }
}
