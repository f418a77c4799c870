#![cfg(feature = "usb")]

//! Helpers for tests against a real reader. When no RC-S380 is attached
//! (CI and the like) they return `Ok(None)` instead of failing.

use rcs380::session::{ReaderSession, Ready};
use rcs380::transport::UsbTransport;
use rcs380::types::CardTechnology;
use rcs380::{Error, Result, SessionConfig};

pub fn open_transport() -> Result<Option<UsbTransport>> {
    match UsbTransport::open() {
        Ok(t) => Ok(Some(t)),
        Err(Error::DeviceNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Open the reader and run the handshake and configuration for `technology`.
pub fn open_and_initialize(
    technology: CardTechnology,
    config: SessionConfig,
) -> Result<Option<ReaderSession<UsbTransport, Ready>>> {
    let Some(transport) = open_transport()? else {
        return Ok(None);
    };
    let session = ReaderSession::new(transport, technology, config).initialize()?;
    Ok(Some(session))
}
