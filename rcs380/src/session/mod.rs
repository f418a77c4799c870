// rcs380-rs/rcs380/src/session/mod.rs

//! Reader session: ACK handshake, configuration for one card technology,
//! then a sense-request poll loop.

mod state;

pub use state::{Idle, Ready, SessionState};

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use log::{debug, error, info, trace, warn};

use crate::card::CardIdentifier;
use crate::config::SessionConfig;
use crate::protocol::ack::expect_ack;
use crate::protocol::codec::{decode_response_frame, encode_command_frame};
use crate::protocol::commands::{self, Command};
use crate::protocol::responses::SenseOutcome;
use crate::transport::BulkTransport;
use crate::types::{CardTechnology, CommandRole, ReaderEndpoints};
use crate::utils::HexDump;
use crate::{Error, Result};

/// Session over a bulk transport that enforces initialization at compile
/// time: only `ReaderSession<_, Ready>` can issue sense-requests.
pub struct ReaderSession<T: BulkTransport, S = Idle> {
    transport: T,
    technology: CardTechnology,
    config: SessionConfig,
    endpoints: ReaderEndpoints,
    state: SessionState,
    _state: PhantomData<S>,
}

impl<T: BulkTransport, S> ReaderSession<T, S> {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn technology(&self) -> CardTechnology {
        self.technology
    }

    pub fn endpoints(&self) -> ReaderEndpoints {
        self.endpoints
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Borrow the underlying transport (tests inspect the mock through this).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Release the transport. Safe to call after a failure already released
    /// it.
    pub fn close(mut self) -> Result<()> {
        debug!("closing {} session in state {}", self.technology, self.state);
        self.transport.close()
    }

    fn set_state(&mut self, next: SessionState) {
        if self.state != next {
            debug!("session state {} -> {}", self.state, next);
            self.state = next;
        }
    }

    /// Mark the session failed and release the transport.
    fn fail(&mut self, err: &Error) {
        error!("{} session failed: {}", self.technology, err);
        self.set_state(SessionState::Failed);
        if let Err(e) = self.transport.close() {
            warn!("release after failure: {}", e);
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        trace!("> {}", HexDump(data));
        self.transport
            .write_bulk(self.endpoints.bulk_out, data, self.config.timeout)?;
        Ok(())
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        let raw = self.transport.read_bulk(
            self.endpoints.bulk_in,
            self.config.receive_buffer_len,
            self.config.timeout,
        )?;
        trace!("< {}", HexDump(&raw));
        Ok(raw)
    }

    /// Send one framed command and read the ACK plus the raw response frame.
    fn exchange(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let frame = encode_command_frame(cmd)?;
        self.write(&frame)?;
        let ack = self.read()?;
        if self.config.validate_ack {
            expect_ack(&ack)?;
        }
        self.read()
    }
}

impl<T: BulkTransport> ReaderSession<T, Idle> {
    /// Wrap an opened transport. Nothing is sent until `initialize`.
    pub fn new(transport: T, technology: CardTechnology, config: SessionConfig) -> Self {
        let endpoints = transport.endpoints();
        Self {
            transport,
            technology,
            config,
            endpoints,
            state: SessionState::Idle,
            _state: PhantomData,
        }
    }

    /// Send the ACK handshake and the configuration commands in order. On
    /// failure the transport is released and the session is gone.
    pub fn initialize(mut self) -> Result<ReaderSession<T, Ready>> {
        if let Err(e) = self.run_initialization() {
            self.fail(&e);
            return Err(e);
        }
        self.set_state(SessionState::Polling);
        Ok(ReaderSession {
            transport: self.transport,
            technology: self.technology,
            config: self.config,
            endpoints: self.endpoints,
            state: self.state,
            _state: PhantomData,
        })
    }

    fn run_initialization(&mut self) -> Result<()> {
        self.set_state(SessionState::Handshaking);
        self.write(commands::ack())
            .map_err(|e| Error::exchange(CommandRole::Ack, e))?;

        self.set_state(SessionState::Configuring);
        for cmd in Command::init_sequence(self.technology)? {
            let raw = self
                .exchange(&cmd)
                .map_err(|e| Error::exchange(cmd.role(), e))?;
            if self.config.verify_checksums {
                decode_response_frame(&raw, true).map_err(|e| Error::exchange(cmd.role(), e))?;
            }
            debug!("{} configured", cmd.role());
        }
        Ok(())
    }
}

impl<T: BulkTransport> ReaderSession<T, Ready> {
    fn ensure_open(&self) -> Result<()> {
        if !self.state.is_terminal() {
            return Ok(());
        }
        match self.state {
            SessionState::Detected => Err(Error::AlreadyDetected),
            _ => Err(Error::SessionClosed),
        }
    }

    /// Issue one sense-request. `Ok(None)` when no card answered or the
    /// reply matched no known layout. Any error is fatal for the session.
    /// A session hands out at most one identifier: once a card was
    /// detected, further calls fail with `AlreadyDetected`.
    pub fn sense(&mut self) -> Result<Option<CardIdentifier>> {
        self.ensure_open()?;
        self.set_state(SessionState::Polling);
        match self.sense_once() {
            Ok(Some(id)) => {
                self.set_state(SessionState::Detected);
                Ok(Some(id))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    fn sense_once(&mut self) -> Result<Option<CardIdentifier>> {
        let cmd = Command::sense_request(self.technology)?;
        let raw = self
            .exchange(&cmd)
            .map_err(|e| Error::exchange(cmd.role(), e))?;
        let verify = self.config.verify_checksums;
        let outcome = SenseOutcome::evaluate(self.technology, &raw, |r| {
            decode_response_frame(r, verify)
        })
        .map_err(|e| Error::exchange(cmd.role(), e))?;

        match outcome {
            SenseOutcome::NoCard => Ok(None),
            SenseOutcome::Detected(id) => Ok(Some(id)),
            SenseOutcome::Unrecognized => {
                warn!(
                    "{} sense response has no recognizable card layout: {}",
                    self.technology,
                    HexDump(&raw)
                );
                Ok(None)
            }
        }
    }

    /// Poll until a card answers or a configured limit is reached
    /// (`PollingFailed`). Unbounded by default.
    pub fn poll(&mut self) -> Result<CardIdentifier> {
        self.poll_loop(None)
    }

    /// Like `poll`, but also stops with `Cancelled` once `cancel` is set.
    /// The flag is checked before every sense-request.
    pub fn poll_until_cancelled(&mut self, cancel: &AtomicBool) -> Result<CardIdentifier> {
        self.poll_loop(Some(cancel))
    }

    fn poll_loop(&mut self, cancel: Option<&AtomicBool>) -> Result<CardIdentifier> {
        self.ensure_open()?;
        let started = Instant::now();
        let mut attempts: u32 = 0;
        if self.config.max_attempts == Some(0) {
            return Err(Error::PollingFailed { attempts });
        }
        debug!("{} polling started", self.technology);

        loop {
            if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                debug!("polling cancelled after {} attempt(s)", attempts);
                return Err(Error::Cancelled);
            }

            attempts = attempts.saturating_add(1);
            if let Some(id) = self.sense()? {
                info!("{} card detected after {} attempt(s)", self.technology, attempts);
                return Ok(id);
            }

            if self.config.max_attempts.is_some_and(|max| attempts >= max)
                || self.config.deadline.is_some_and(|d| started.elapsed() >= d)
            {
                debug!("polling gave up after {} attempt(s)", attempts);
                return Err(Error::PollingFailed { attempts });
            }

            if !self.config.poll_interval.is_zero() {
                thread::sleep(self.config.poll_interval);
            }
        }
    }
}

/// Run the whole state machine: handshake, configure, poll until a card
/// answers. The transport is released on every exit path.
pub fn detect_card<T: BulkTransport>(
    transport: T,
    technology: CardTechnology,
    config: SessionConfig,
) -> Result<CardIdentifier> {
    let mut session = ReaderSession::new(transport, technology, config).initialize()?;
    let detected = session.poll();
    let closed = session.close();
    let id = detected?;
    closed?;
    Ok(id)
}
