// rcs380-rs/rcs380/src/prelude.rs

pub use crate::card::{CardIdentifier, FelicaInfo, TypeBInfo};
pub use crate::config::SessionConfig;
pub use crate::protocol::{Command, Frame, SenseOutcome};
pub use crate::session::{Idle, ReaderSession, Ready, SessionState, detect_card};
pub use crate::transport::{BulkTransport, MockTransport};
#[cfg(feature = "usb")]
pub use crate::transport::UsbTransport;
pub use crate::{
    ApplicationData, CardTechnology, CommandRole, Error, Idm, Nfcid, Pmm, ProtocolInfo,
    ReaderEndpoints, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::{HexDump, bytes_to_hex, ms};
