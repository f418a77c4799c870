// rcs380-rs/rcs380/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::time::Duration;

use log::{debug, warn};
use rusb::{Context, DeviceHandle, UsbContext};

use crate::constants::{
    RCS380_PRODUCT_ID, SONY_VENDOR_ID, USB_ALT_SETTING, USB_CONFIGURATION, USB_INTERFACE,
};
use crate::transport::traits::BulkTransport;
use crate::types::ReaderEndpoints;
use crate::{Error, Result};

mod descriptor;
mod discovery;

pub use descriptor::find_bulk_endpoints;
pub use discovery::{list_devices, UsbDeviceInfo};

/// Bulk transport over an open, claimed RC-S380. The interface is released
/// by `close()` or on drop, whichever comes first.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    endpoints: ReaderEndpoints,
    claimed: bool,
}

impl UsbTransport {
    /// Open the first Sony RC-S380 (054c:06c3) found on the bus.
    pub fn open() -> Result<Self> {
        Self::open_with_ids(SONY_VENDOR_ID, RCS380_PRODUCT_ID)
    }

    /// Open the first device with the given vendor/product id.
    pub fn open_with_ids(vendor_id: u16, product_id: u16) -> Result<Self> {
        let ctx = Context::new()?;
        let mut handle = ctx
            .open_device_with_vid_pid(vendor_id, product_id)
            .ok_or(Error::DeviceNotFound {
                vendor_id,
                product_id,
            })?;

        // Not supported on every platform; claim_interface reports the hard
        // failure if a kernel driver still owns the interface.
        if let Err(e) = handle.set_auto_detach_kernel_driver(true) {
            debug!("auto-detach kernel driver unavailable: {}", e);
        }

        // Already-configured devices may answer Busy here.
        if let Err(e) = handle.set_active_configuration(USB_CONFIGURATION) {
            warn!("set configuration {} failed: {}", USB_CONFIGURATION, e);
        }

        let endpoints = find_bulk_endpoints(&handle.device())?.ok_or_else(|| {
            Error::Transport(format!(
                "no bulk IN/OUT endpoint pair on {:04x}/{:04x}",
                vendor_id, product_id
            ))
        })?;

        handle.claim_interface(USB_INTERFACE)?;
        let mut transport = UsbTransport {
            handle,
            endpoints,
            claimed: true,
        };

        if let Err(e) = transport
            .handle
            .set_alternate_setting(USB_INTERFACE, USB_ALT_SETTING)
        {
            warn!("set alternate setting {} failed: {}", USB_ALT_SETTING, e);
        }

        debug!(
            "opened {:04x}/{:04x}: bulk in {:#04x}, bulk out {:#04x}",
            vendor_id, product_id, endpoints.bulk_in, endpoints.bulk_out
        );
        Ok(transport)
    }
}

fn map_usb_error(e: rusb::Error) -> Error {
    match e {
        rusb::Error::Timeout => Error::Timeout,
        other => Error::Usb(other),
    }
}

impl BulkTransport for UsbTransport {
    fn endpoints(&self) -> ReaderEndpoints {
        self.endpoints
    }

    fn write_bulk(&mut self, endpoint: u8, data: &[u8], timeout: Duration) -> Result<usize> {
        if !self.claimed {
            return Err(Error::SessionClosed);
        }
        let n = self
            .handle
            .write_bulk(endpoint, data, timeout)
            .map_err(map_usb_error)?;
        if n != data.len() {
            return Err(Error::Transport(format!(
                "short write: {} of {} bytes",
                n,
                data.len()
            )));
        }
        Ok(n)
    }

    fn read_bulk(&mut self, endpoint: u8, max_len: usize, timeout: Duration) -> Result<Vec<u8>> {
        if !self.claimed {
            return Err(Error::SessionClosed);
        }
        let mut buf = vec![0u8; max_len];
        let n = self
            .handle
            .read_bulk(endpoint, &mut buf, timeout)
            .map_err(map_usb_error)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn close(&mut self) -> Result<()> {
        if !self.claimed {
            return Ok(());
        }
        self.claimed = false;
        self.handle.release_interface(USB_INTERFACE)?;
        debug!("released interface {}", USB_INTERFACE);
        Ok(())
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("failed to release interface {}: {}", USB_INTERFACE, e);
        }
    }
}
