#[path = "../common/mod.rs"]
mod common;

use rcs380::protocol::{checksum, lcs};

#[test]
fn lcs_and_checksum_examples() {
    assert_eq!(lcs(3), 0xfd);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0x0100), 0xff);

    assert_eq!(checksum(0xd6, &[0x2a, 0x01]), 0xff);
    assert_eq!(checksum(0xd6, &[0x06, 0x00]), 0x24);
    assert_eq!(checksum(0x00, &[]), 0x00);
}

#[test]
fn captured_frames_carry_valid_checksums() {
    for dump in [
        common::SET_COMMAND_TYPE_FRAME,
        common::SWITCH_RF_FRAME,
        common::SET_RF_TYPE_F_FRAME,
    ] {
        let raw = common::bytes(dump);
        let len = u16::from_le_bytes([raw[5], raw[6]]);
        assert_eq!(lcs(len), raw[7], "{}", dump);

        let body = &raw[8..raw.len() - 2];
        let sum = body.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        assert_eq!(sum.wrapping_add(raw[raw.len() - 2]), 0, "{}", dump);
    }
}
