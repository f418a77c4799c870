// rcs380-rs/rcs380/src/protocol/codec.rs

use crate::constants::{DIRECTION_HOST_TO_READER, DIRECTION_READER_TO_HOST};
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;

/// Encode a Command into a full wire frame with the host-to-reader
/// direction byte.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(DIRECTION_HOST_TO_READER, cmd.payload())
}

/// Decode a response frame and return its payload.
///
/// With `verify` set the frame is fully validated and must carry the
/// reader-to-host direction byte. Without it the header and trailer are
/// stripped as-is.
pub fn decode_response_frame(raw: &[u8], verify: bool) -> Result<Vec<u8>> {
    if !verify {
        return Ok(Frame::decode_unchecked(raw)?.payload);
    }
    let frame = Frame::decode(raw)?;
    if frame.direction != DIRECTION_READER_TO_HOST {
        return Err(Error::UnexpectedResponse {
            expected: DIRECTION_READER_TO_HOST,
            actual: frame.direction,
        });
    }
    Ok(frame.payload)
}
