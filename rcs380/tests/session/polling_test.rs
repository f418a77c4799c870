#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use rcs380::session::{ReaderSession, SessionState, detect_card};
use rcs380::types::CardTechnology;
use rcs380::utils::ms;
use rcs380::{Error, SessionConfig};

fn config() -> SessionConfig {
    SessionConfig::default().with_poll_interval(ms(0))
}

#[test]
fn detect_felica_card() {
    common::init_logging();
    let mut mock = common::ready_mock(CardTechnology::Felica);
    mock.push_exchange(&common::felica_sense_payload());

    let card = detect_card(mock, CardTechnology::Felica, config()).unwrap();
    assert_eq!(card.idm(), Some(&common::sample_idm()));
    assert_eq!(
        card.to_string(),
        " IDm: 012e4cd38a1b00ff\n PMm: 100b4b428485d0ff"
    );
}

#[test]
fn detect_type_b_card_after_no_card_replies() {
    let mut mock = common::ready_mock(CardTechnology::TypeB);
    for _ in 0..4 {
        mock.push_ack();
        mock.push_response(common::no_card_frame());
    }
    mock.push_ack();
    mock.push_response(common::type_b_sense_frame());

    let mut session = ReaderSession::new(mock, CardTechnology::TypeB, config())
        .initialize()
        .unwrap();
    let card = session.poll().unwrap();
    assert_eq!(card.nfcid(), Some(&common::sample_nfcid()));
    assert_eq!(session.state(), SessionState::Detected);

    // every sense-request carries the same bytes
    let sent = session.transport().sent_frames();
    let sense = &sent[6..];
    assert_eq!(sense.len(), 5);
    assert!(sense.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn deadline_bounds_polling() {
    let mut mock = common::ready_mock(CardTechnology::Felica);
    for _ in 0..64 {
        mock.push_exchange(&rcs380::test_support::no_card_payload());
    }
    let cfg = SessionConfig::default()
        .with_poll_interval(ms(5))
        .with_deadline(Duration::from_millis(20));
    let mut session = ReaderSession::new(mock, CardTechnology::Felica, cfg)
        .initialize()
        .unwrap();

    match session.poll() {
        Err(Error::PollingFailed { attempts }) => assert!(attempts >= 1 && attempts < 64),
        other => panic!("expected PollingFailed, got: {:?}", other),
    }
}

#[test]
fn cancellation_flag_stops_polling() {
    let mock = common::ready_mock(CardTechnology::Felica);
    let mut session = ReaderSession::new(mock, CardTechnology::Felica, config())
        .initialize()
        .unwrap();
    let cancel = AtomicBool::new(true);
    assert!(matches!(
        session.poll_until_cancelled(&cancel),
        Err(Error::Cancelled)
    ));
    assert_eq!(session.state(), SessionState::Polling);
}

#[test]
fn no_card_reply_waits_poll_interval_before_retry() {
    let interval = ms(30);
    let mut mock = common::ready_mock(CardTechnology::Felica);
    mock.push_ack();
    mock.push_response(common::no_card_frame());
    mock.push_ack();
    mock.push_response(common::no_card_frame());
    mock.push_ack();
    mock.push_response(common::felica_sense_frame());

    let cfg = SessionConfig::default().with_poll_interval(interval);
    let mut session = ReaderSession::new(mock, CardTechnology::Felica, cfg)
        .initialize()
        .unwrap();

    let started = Instant::now();
    let card = session.poll().unwrap();
    let elapsed = started.elapsed();

    assert_eq!(card.idm(), Some(&common::sample_idm()));
    assert!(elapsed >= interval * 2, "elapsed {:?}", elapsed);
    assert_eq!(session.transport().sent_frames()[6..].len(), 3);
}

#[test]
fn second_poll_after_detection_is_refused() {
    let mut mock = common::ready_mock(CardTechnology::TypeB);
    mock.push_ack();
    mock.push_response(common::type_b_sense_frame());
    mock.push_ack();
    mock.push_response(common::type_b_sense_frame());

    let mut session = ReaderSession::new(mock, CardTechnology::TypeB, config())
        .initialize()
        .unwrap();
    session.poll().unwrap();

    match session.poll() {
        Err(Error::AlreadyDetected) => {}
        other => panic!("expected AlreadyDetected, got: {:?}", other),
    }
    assert_eq!(session.state(), SessionState::Detected);
    session.close().unwrap();
}

#[test]
fn short_atqb_keeps_polling() {
    let mut short = common::type_b_sense_payload();
    short.truncate(18);
    let mut mock = common::ready_mock(CardTechnology::TypeB);
    mock.push_exchange(&short);
    mock.push_exchange(&common::type_b_sense_payload());

    let mut session = ReaderSession::new(mock, CardTechnology::TypeB, config())
        .initialize()
        .unwrap();
    let card = session.poll().unwrap();
    assert_eq!(card.nfcid(), Some(&common::sample_nfcid()));
    assert_eq!(session.transport().sent_frames()[6..].len(), 2);
    assert!(!session.transport().is_closed());
}
