#[path = "../common/mod.rs"]
mod common;

use rcs380::protocol::codec::decode_response_frame;
use rcs380::protocol::{SenseOutcome, card_present};
use rcs380::types::CardTechnology;

fn evaluate(technology: CardTechnology, raw: &[u8]) -> rcs380::Result<SenseOutcome> {
    SenseOutcome::evaluate(technology, raw, |r| decode_response_frame(r, true))
}

#[test]
fn felica_sense_frame_yields_idm_and_pmm() {
    match evaluate(CardTechnology::Felica, &common::felica_sense_frame()).unwrap() {
        SenseOutcome::Detected(id) => {
            let info = id.as_felica().unwrap();
            assert_eq!(*info.idm(), common::sample_idm());
            assert_eq!(*info.pmm(), common::sample_pmm());
        }
        other => panic!("expected a FeliCa card, got {:?}", other),
    }
}

#[test]
fn type_b_sense_frame_yields_nfcid() {
    match evaluate(CardTechnology::TypeB, &common::type_b_sense_frame()).unwrap() {
        SenseOutcome::Detected(id) => {
            assert_eq!(id.nfcid(), Some(&common::sample_nfcid()));
            let text = id.to_string();
            assert!(text.starts_with(" NFCID: 3a917c05\n"), "{}", text);
            assert!(text.ends_with(" Protocol Info: 00818100"), "{}", text);
        }
        other => panic!("expected a Type-B card, got {:?}", other),
    }
}

#[test]
fn status_bytes_gate_detection() {
    let raw = common::no_card_frame();
    assert!(!card_present(&raw));
    assert_eq!(evaluate(CardTechnology::Felica, &raw).unwrap(), SenseOutcome::NoCard);

    // too short to carry the status bytes
    assert!(!card_present(&raw[..9]));
}

#[test]
fn truncated_identifier_is_unrecognized() {
    let mut payload = common::felica_sense_payload();
    payload.truncate(20);
    let raw = common::reader_frame(&payload);
    assert_eq!(
        evaluate(CardTechnology::Felica, &raw).unwrap(),
        SenseOutcome::Unrecognized
    );
}

#[test]
fn atqb_with_three_byte_protocol_info_is_unrecognized() {
    let mut payload = common::type_b_sense_payload();
    payload.truncate(18);
    let raw = common::reader_frame(&payload);
    assert!(card_present(&raw));
    assert_eq!(
        evaluate(CardTechnology::TypeB, &raw).unwrap(),
        SenseOutcome::Unrecognized
    );
}
