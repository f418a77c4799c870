// rcs380-rs/rcs380/src/session/state.rs

use derive_more::Display;

/// Type-state markers
pub struct Idle;
pub struct Ready;

/// Runtime state of a reader session, tracked for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SessionState {
    /// Transport opened, nothing sent yet
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "handshaking")]
    Handshaking,
    #[display(fmt = "configuring")]
    Configuring,
    /// Issuing sense-requests
    #[display(fmt = "polling")]
    Polling,
    /// Terminal: a card answered and its identifier was handed out
    #[display(fmt = "detected")]
    Detected,
    /// Terminal: an exchange failed and the transport was released
    #[display(fmt = "failed")]
    Failed,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Detected | Self::Failed)
    }
}
