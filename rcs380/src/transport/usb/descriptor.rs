// rcs380-rs/rcs380/src/transport/usb/descriptor.rs

use rusb::{Device, TransferType, UsbContext};

use crate::types::ReaderEndpoints;
use crate::Result;

/// Inspect the active configuration and return the bulk IN/OUT endpoint
/// addresses. `Ok(None)` when the configuration has no usable pair.
pub fn find_bulk_endpoints<C: UsbContext>(device: &Device<C>) -> Result<Option<ReaderEndpoints>> {
    let config = device.active_config_descriptor()?;
    let addresses = config
        .interfaces()
        .flat_map(|interface| interface.descriptors())
        .flat_map(|desc| {
            desc.endpoint_descriptors()
                .filter(|ep| ep.transfer_type() == TransferType::Bulk)
                .map(|ep| ep.address())
                .collect::<Vec<_>>()
        });
    Ok(ReaderEndpoints::from_bulk_addresses(addresses))
}
