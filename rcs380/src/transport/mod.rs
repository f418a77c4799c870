// rcs380-rs/rcs380/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::MockTransport;
pub use traits::BulkTransport;
#[cfg(feature = "usb")]
pub use usb::{list_devices, UsbDeviceInfo, UsbTransport};
