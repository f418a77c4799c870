#[path = "../common/mod.rs"]
mod common;

use rcs380::session::{ReaderSession, SessionState};
use rcs380::types::CardTechnology;
use rcs380::SessionConfig;

#[test]
fn initialize_transitions_to_polling() {
    common::init_logging();
    let mock = common::ready_mock(CardTechnology::Felica);
    let session = ReaderSession::new(mock, CardTechnology::Felica, SessionConfig::default());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.endpoints().bulk_in, 0x81);

    let ready = session.initialize().unwrap();
    assert_eq!(ready.state(), SessionState::Polling);
    assert_eq!(ready.technology(), CardTechnology::Felica);
}

#[test]
fn felica_init_bytes_match_capture() {
    let mock = common::ready_mock(CardTechnology::Felica);
    let ready = ReaderSession::new(mock, CardTechnology::Felica, SessionConfig::default())
        .initialize()
        .unwrap();

    let sent = ready.transport().sent_frames();
    assert_eq!(sent[0], common::bytes(common::ACK));
    assert_eq!(sent[1], common::bytes(common::SET_COMMAND_TYPE_FRAME));
    assert_eq!(sent[2], common::bytes(common::SWITCH_RF_FRAME));
    assert_eq!(sent[3], common::bytes(common::SET_RF_TYPE_F_FRAME));
}

#[test]
fn technology_specific_frames_differ() {
    let mut frames = Vec::new();
    for tech in [CardTechnology::Felica, CardTechnology::TypeB] {
        let ready = ReaderSession::new(common::ready_mock(tech), tech, SessionConfig::default())
            .initialize()
            .unwrap();
        frames.push(ready.transport().sent_frames());
    }
    let (f, b) = (&frames[0], &frames[1]);
    // ACK, set-command-type, switch-rf and set-protocol-1 are shared
    for i in [0, 1, 2, 4] {
        assert_eq!(f[i], b[i], "frame {}", i);
    }
    // set-rf-type and set-protocol-2 are not
    assert_ne!(f[3], b[3]);
    assert_ne!(f[5], b[5]);
}

#[test]
fn every_exchange_reads_ack_then_response() {
    let mock = common::ready_mock(CardTechnology::TypeB);
    let ready = ReaderSession::new(mock, CardTechnology::TypeB, SessionConfig::default())
        .initialize()
        .unwrap();
    let reads = &ready.transport().reads;
    assert_eq!(reads.len(), 10);
    assert!(reads.iter().all(|&(ep, len)| ep == 0x81 && len == 512));
}
