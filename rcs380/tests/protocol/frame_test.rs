#[path = "../common/mod.rs"]
mod common;

use rcs380::Error;
use rcs380::protocol::Frame;

#[test]
fn sense_frame_decodes_to_fixture_payload() {
    let frame = Frame::decode(&common::felica_sense_frame()).expect("frame decode");
    assert_eq!(frame.direction, 0xd7);
    assert_eq!(frame.payload, common::felica_sense_payload());
}

#[test]
fn host_frame_matches_capture() {
    let raw = Frame::encode(0xd6, &[0x00, 0x01, 0x01, 0x0f, 0x01]).unwrap();
    assert_eq!(raw, common::bytes(common::SET_RF_TYPE_F_FRAME));

    let decoded = Frame::decode(&raw).unwrap();
    assert_eq!(decoded, Frame::new(0xd6, vec![0x00, 0x01, 0x01, 0x0f, 0x01]));
}

#[test]
fn ack_is_not_a_general_frame() {
    match Frame::decode(&common::bytes(common::ACK)) {
        Err(Error::InvalidLength { .. }) | Err(Error::FrameFormat(_)) => {}
        other => panic!("expected a framing error, got: {:?}", other),
    }
}

#[test]
fn truncated_frame_is_rejected() {
    let mut raw = common::type_b_sense_frame();
    raw.truncate(raw.len() - 3);
    let err = Frame::decode(&raw).unwrap_err();
    assert!(err.is_integrity(), "{:?}", err);
}
