// rcs380-rs/rcs380/src/transport/usb/discovery.rs

use std::fmt;
use std::time::Duration;

use log::debug;
use rusb::{Context, UsbContext};

use crate::Result;

const STRING_DESCRIPTOR_TIMEOUT: Duration = Duration::from_millis(200);

/// One USB device seen on the bus, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub bus: u8,
    pub address: u8,
    pub port_path: Vec<u8>,
    pub manufacturer: Option<String>,
    pub product: Option<String>,
    pub serial: Option<String>,
}

impl UsbDeviceInfo {
    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }
}

impl fmt::Display for UsbDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}/{:04x} bus {:03} device {:03}",
            self.vendor_id, self.product_id, self.bus, self.address
        )?;
        if !self.port_path.is_empty() {
            let path: Vec<String> = self.port_path.iter().map(|p| p.to_string()).collect();
            write!(f, " port {}", path.join("."))?;
        }
        if let Some(m) = &self.manufacturer {
            write!(f, " {}", m)?;
        }
        if let Some(p) = &self.product {
            write!(f, " {}", p)?;
        }
        if let Some(s) = &self.serial {
            write!(f, " serial {}", s)?;
        }
        Ok(())
    }
}

/// Enumerate every device on the bus. String descriptors are best-effort:
/// devices we are not allowed to open are still listed without them.
pub fn list_devices() -> Result<Vec<UsbDeviceInfo>> {
    let ctx = Context::new()?;
    let mut out = Vec::new();
    for device in ctx.devices()?.iter() {
        let dd = device.device_descriptor()?;
        let mut info = UsbDeviceInfo {
            vendor_id: dd.vendor_id(),
            product_id: dd.product_id(),
            bus: device.bus_number(),
            address: device.address(),
            port_path: device.port_numbers().unwrap_or_default(),
            manufacturer: None,
            product: None,
            serial: None,
        };
        match device.open() {
            Ok(handle) => {
                if let Ok(langs) = handle.read_languages(STRING_DESCRIPTOR_TIMEOUT) {
                    if let Some(lang) = langs.first().copied() {
                        info.manufacturer = handle
                            .read_manufacturer_string(lang, &dd, STRING_DESCRIPTOR_TIMEOUT)
                            .ok();
                        info.product = handle
                            .read_product_string(lang, &dd, STRING_DESCRIPTOR_TIMEOUT)
                            .ok();
                        info.serial = handle
                            .read_serial_number_string(lang, &dd, STRING_DESCRIPTOR_TIMEOUT)
                            .ok();
                    }
                }
            }
            Err(e) => debug!("cannot open {:04x}/{:04x}: {}", info.vendor_id, info.product_id, e),
        }
        out.push(info);
    }
    Ok(out)
}
