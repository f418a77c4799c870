//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same reader replies.

use crate::protocol::Command;
use crate::transport::mock::MockTransport;
use crate::types::CardTechnology;

/// Payload the reader returns for a successful configuration command: the
/// command code + 1, followed by a zero status byte.
#[doc(hidden)]
pub fn config_reply(cmd: &Command) -> Vec<u8> {
    let code = cmd.payload().first().copied().unwrap_or(0);
    vec![code.wrapping_add(1), 0x00]
}

/// Push ACK + reply frame for each configuration command of `technology`.
#[doc(hidden)]
pub fn seed_init(mock: &mut MockTransport, technology: CardTechnology) {
    if let Ok(sequence) = Command::init_sequence(technology) {
        for cmd in &sequence {
            mock.push_exchange(&config_reply(cmd));
        }
    }
}

/// A MockTransport pre-seeded with a successful initialization.
#[doc(hidden)]
pub fn initialized_mock(technology: CardTechnology) -> MockTransport {
    let mut mock = MockTransport::new();
    seed_init(&mut mock, technology);
    mock
}

/// Sense-request reply payload reporting no card (status byte non-zero).
#[doc(hidden)]
pub fn no_card_payload() -> Vec<u8> {
    vec![0x05, 0x80, 0x00, 0x00, 0x00]
}

/// Sense-request reply payload carrying a FeliCa polling response.
#[doc(hidden)]
pub fn felica_sense_payload(idm: [u8; 8], pmm: [u8; 8]) -> Vec<u8> {
    let mut p = vec![0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x14, 0x01];
    p.extend_from_slice(&idm);
    p.extend_from_slice(&pmm);
    p.extend_from_slice(&[0x00, 0x03]);
    p
}

/// Sense-request reply payload carrying a Type-B ATQB.
#[doc(hidden)]
pub fn type_b_sense_payload(nfcid: [u8; 4], app: [u8; 4], proto: [u8; 4]) -> Vec<u8> {
    let mut p = vec![0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x50];
    p.extend_from_slice(&nfcid);
    p.extend_from_slice(&app);
    p.extend_from_slice(&proto);
    p
}
