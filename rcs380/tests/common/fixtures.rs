// fixtures.rs — provides commonly used test payloads/frames

use rcs380::constants::DIRECTION_READER_TO_HOST;
use rcs380::protocol::Frame;
use rcs380::types::{Idm, Nfcid, Pmm};

/// Parse a space-separated hex dump into bytes.
pub fn bytes(dump: &str) -> Vec<u8> {
    hex::decode(dump.replace(' ', "")).expect("valid hex fixture")
}

/// Frames the host sends, as captured from a real RC-S380 session.
pub const SET_COMMAND_TYPE_FRAME: &str = "00 00 ff ff ff 03 00 fd d6 2a 01 ff 00";
pub const SWITCH_RF_FRAME: &str = "00 00 ff ff ff 03 00 fd d6 06 00 24 00";
pub const SET_RF_TYPE_F_FRAME: &str = "00 00 ff ff ff 06 00 fa d6 00 01 01 0f 01 18 00";
pub const ACK: &str = "00 00 ff 00 ff 00";

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x2e, 0x4c, 0xd3, 0x8a, 0x1b, 0x00, 0xff]
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    [0x10, 0x0b, 0x4b, 0x42, 0x84, 0x85, 0xd0, 0xff]
}

pub fn sample_nfcid_bytes() -> [u8; 4] {
    [0x3a, 0x91, 0x7c, 0x05]
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes(sample_pmm_bytes())
}

pub fn sample_nfcid() -> Nfcid {
    Nfcid::from_bytes(sample_nfcid_bytes())
}

pub fn felica_sense_payload() -> Vec<u8> {
    rcs380::test_support::felica_sense_payload(sample_idm_bytes(), sample_pmm_bytes())
}

pub fn type_b_sense_payload() -> Vec<u8> {
    rcs380::test_support::type_b_sense_payload(
        sample_nfcid_bytes(),
        [0x00, 0x00, 0x00, 0x00],
        [0x00, 0x81, 0x81, 0x00],
    )
}

pub fn reader_frame(payload: &[u8]) -> Vec<u8> {
    Frame::encode(DIRECTION_READER_TO_HOST, payload).unwrap()
}

pub fn felica_sense_frame() -> Vec<u8> {
    reader_frame(&felica_sense_payload())
}

pub fn type_b_sense_frame() -> Vec<u8> {
    reader_frame(&type_b_sense_payload())
}

pub fn no_card_frame() -> Vec<u8> {
    reader_frame(&rcs380::test_support::no_card_payload())
}
