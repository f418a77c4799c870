// rcs380-rs/rcs380/src/constants.rs
//! Common protocol constants used across the crate

/// Sony vendor id
pub const SONY_VENDOR_ID: u16 = 0x054c;

/// RC-S380 product id
pub const RCS380_PRODUCT_ID: u16 = 0x06c3;

/// Wire frame preamble: 0x00 0x00 0xFF 0xFF 0xFF
pub const FRAME_PREAMBLE: [u8; 5] = [0x00, 0x00, 0xFF, 0xFF, 0xFF];

/// Wire frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Preamble(5) + LEN(2) + LCS(1)
pub const FRAME_HEADER_LEN: usize = 8;

/// Header + direction byte + DCS + postamble. A frame carrying an empty
/// payload is exactly this long.
pub const FRAME_OVERHEAD: usize = FRAME_HEADER_LEN + 1 + 1 + 1;

/// Maximum command/response payload length (excluding the direction byte)
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Host -> reader direction byte
pub const DIRECTION_HOST_TO_READER: u8 = 0xD6;

/// Reader -> host direction byte
pub const DIRECTION_READER_TO_HOST: u8 = 0xD7;

/// Low-level ACK frame. Sent once by the host at session start and returned
/// by the reader after every command it accepts.
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Low-level NACK frame returned by the reader for a rejected command.
pub const NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Raw-frame offsets of the two status bytes inspected after a sense-request
pub const SENSE_STATUS_OFFSETS: (usize, usize) = (9, 10);

/// Status bytes that signal a card answered the sense-request
pub const SENSE_STATUS_CARD_PRESENT: (u8, u8) = (0x05, 0x00);

/// USB interface claimed for bulk transfers
pub const USB_INTERFACE: u8 = 0;

/// USB alternate setting selected on the claimed interface
pub const USB_ALT_SETTING: u8 = 0;

/// USB configuration selected before claiming the interface
pub const USB_CONFIGURATION: u8 = 1;
