#[path = "../common/mod.rs"]
mod common;

use rcs380::Error;
use rcs380::transport::BulkTransport;
use rcs380::transport::mock::MockTransport;
use rcs380::utils::ms;

#[test]
fn read_error_then_recovery() {
    let mut m = MockTransport::new();
    m.push_error(Error::Transport("stall".into()));
    m.push_ack();

    // First read should fail (simulated)
    assert!(m.read_bulk(0x81, 512, ms(1000)).is_err());

    // Second read should return the queued response
    let r = m.read_bulk(0x81, 512, ms(1000)).unwrap();
    assert_eq!(r, common::bytes(common::ACK));
}

#[test]
fn closed_transport_refuses_io() {
    let mut m = MockTransport::new();
    m.close().unwrap();
    assert!(matches!(
        m.write_bulk(0x02, &[0x00], ms(10)),
        Err(Error::Transport(_))
    ));
    assert!(m.read_bulk(0x81, 512, ms(10)).is_err());
}
