// rcs380-rs/rcs380/src/transport/mock.rs

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::constants::{ACK_FRAME, DIRECTION_READER_TO_HOST};
use crate::protocol::Frame;
use crate::transport::traits::BulkTransport;
use crate::types::ReaderEndpoints;
use crate::{Error, Result};

/// Endpoint addresses reported by the mock (match a real RC-S380).
pub const MOCK_ENDPOINTS: ReaderEndpoints = ReaderEndpoints::new(0x81, 0x02);

/// Mock transport for unit tests. It records written frames and returns
/// queued replies; an empty queue reads as `Timeout`.
#[derive(Debug)]
pub struct MockTransport {
    /// Every successful write as (endpoint, bytes)
    pub sent: Vec<(u8, Vec<u8>)>,
    /// Every read request as (endpoint, max_len)
    pub reads: Vec<(u8, usize)>,
    pub responses: VecDeque<Result<Vec<u8>>>,
    pub endpoints: ReaderEndpoints,
    /// Testing hook: 0-based index of the write that should fail
    pub fail_write_at: Option<usize>,
    writes: usize,
    closed: bool,
    released: Rc<Cell<usize>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            reads: Vec::new(),
            responses: VecDeque::new(),
            endpoints: MOCK_ENDPOINTS,
            fail_write_at: None,
            writes: 0,
            closed: false,
            released: Rc::new(Cell::new(0)),
        }
    }

    /// Queue raw bytes for the next read.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue an error for the next read.
    pub fn push_error(&mut self, err: Error) {
        self.responses.push_back(Err(err));
    }

    pub fn push_ack(&mut self) {
        self.push_response(ACK_FRAME.to_vec());
    }

    /// Queue a reader-to-host frame carrying `payload`. An oversized payload
    /// queues the encoding error instead.
    pub fn push_frame(&mut self, payload: &[u8]) {
        match Frame::encode(DIRECTION_READER_TO_HOST, payload) {
            Ok(raw) => self.push_response(raw),
            Err(e) => self.push_error(e),
        }
    }

    /// Queue one complete command exchange: ACK then response frame.
    pub fn push_exchange(&mut self, payload: &[u8]) {
        self.push_ack();
        self.push_frame(payload);
    }

    /// Make the `index`-th write (0-based) fail with a transport error.
    pub fn fail_write(&mut self, index: usize) {
        self.fail_write_at = Some(index);
    }

    /// Bytes of every successful write, in order.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.sent.iter().map(|(_, b)| b.clone()).collect()
    }

    /// Shared counter of how many times the transport was released. Stays
    /// readable after the mock itself is dropped.
    pub fn release_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.released)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl BulkTransport for MockTransport {
    fn endpoints(&self) -> ReaderEndpoints {
        self.endpoints
    }

    fn write_bulk(&mut self, endpoint: u8, data: &[u8], _timeout: Duration) -> Result<usize> {
        if self.closed {
            return Err(Error::Transport("mock transport closed".into()));
        }
        let index = self.writes;
        self.writes += 1;
        if self.fail_write_at == Some(index) {
            return Err(Error::Transport(format!("injected write failure #{index}")));
        }
        self.sent.push((endpoint, data.to_vec()));
        Ok(data.len())
    }

    fn read_bulk(&mut self, endpoint: u8, max_len: usize, _timeout: Duration) -> Result<Vec<u8>> {
        if self.closed {
            return Err(Error::Transport("mock transport closed".into()));
        }
        self.reads.push((endpoint, max_len));
        match self.responses.pop_front() {
            Some(Ok(mut bytes)) => {
                bytes.truncate(max_len);
                Ok(bytes)
            }
            Some(Err(e)) => Err(e),
            None => Err(Error::Timeout),
        }
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.released.set(self.released.get() + 1);
        }
        Ok(())
    }
}

impl Drop for MockTransport {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
