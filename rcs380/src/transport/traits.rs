// rcs380-rs/rcs380/src/transport/traits.rs

use std::time::Duration;

use crate::Result;
use crate::types::ReaderEndpoints;

/// Transport trait abstracts the reader's two bulk pipes away from the
/// protocol/session logic.
pub trait BulkTransport {
    /// Bulk IN/OUT addresses discovered when the transport was opened.
    fn endpoints(&self) -> ReaderEndpoints;

    /// Write `data` to the OUT endpoint. Returns the number of bytes written.
    fn write_bulk(&mut self, endpoint: u8, data: &[u8], timeout: Duration) -> Result<usize>;

    /// Read at most `max_len` bytes from the IN endpoint.
    fn read_bulk(&mut self, endpoint: u8, max_len: usize, timeout: Duration) -> Result<Vec<u8>>;

    /// Release the underlying device. Must be idempotent: a second call is a
    /// no-op. Implementations also release on drop.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: BulkTransport + ?Sized> BulkTransport for Box<T> {
    fn endpoints(&self) -> ReaderEndpoints {
        (**self).endpoints()
    }

    fn write_bulk(&mut self, endpoint: u8, data: &[u8], timeout: Duration) -> Result<usize> {
        (**self).write_bulk(endpoint, data, timeout)
    }

    fn read_bulk(&mut self, endpoint: u8, max_len: usize, timeout: Duration) -> Result<Vec<u8>> {
        (**self).read_bulk(endpoint, max_len, timeout)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<T: BulkTransport + ?Sized> BulkTransport for &mut T {
    fn endpoints(&self) -> ReaderEndpoints {
        (**self).endpoints()
    }

    fn write_bulk(&mut self, endpoint: u8, data: &[u8], timeout: Duration) -> Result<usize> {
        (**self).write_bulk(endpoint, data, timeout)
    }

    fn read_bulk(&mut self, endpoint: u8, max_len: usize, timeout: Duration) -> Result<Vec<u8>> {
        (**self).read_bulk(endpoint, max_len, timeout)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
