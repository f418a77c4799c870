// rcs380-rs/rcs380/src/protocol/commands/mod.rs

mod templates;

use crate::constants::ACK_FRAME;
use crate::types::{CardTechnology, CommandRole};
use crate::{Error, Result};

/// The 6-byte ACK frame the host sends once at session start. It is the same
/// for every technology and is never wrapped in a general frame.
pub fn ack() -> &'static [u8; 6] {
    &ACK_FRAME
}

/// A reader command payload (before framing), resolved from the template
/// table when constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    role: CommandRole,
    technology: CardTechnology,
    payload: &'static [u8],
}

impl Command {
    /// Resolve the payload for `role` under `technology`. Fails with
    /// `UnsupportedTechnology` when no template exists for the pair.
    pub fn new(role: CommandRole, technology: CardTechnology) -> Result<Self> {
        let payload = templates::lookup(role, technology).ok_or_else(|| {
            Error::UnsupportedTechnology(format!("{} has no {} command", technology, role))
        })?;
        Ok(Self {
            role,
            technology,
            payload,
        })
    }

    /// Resolve a command from a single-letter technology code (`F` / `B`).
    pub fn for_code(role: CommandRole, code: char) -> Result<Self> {
        Self::new(role, CardTechnology::try_from(code)?)
    }

    pub fn set_command_type(technology: CardTechnology) -> Result<Self> {
        Self::new(CommandRole::SetCommandType, technology)
    }

    pub fn switch_rf(technology: CardTechnology) -> Result<Self> {
        Self::new(CommandRole::SwitchRf, technology)
    }

    pub fn set_rf_type(technology: CardTechnology) -> Result<Self> {
        Self::new(CommandRole::SetRfType, technology)
    }

    pub fn set_protocol_1(technology: CardTechnology) -> Result<Self> {
        Self::new(CommandRole::SetProtocol1, technology)
    }

    pub fn set_protocol_2(technology: CardTechnology) -> Result<Self> {
        Self::new(CommandRole::SetProtocol2, technology)
    }

    pub fn sense_request(technology: CardTechnology) -> Result<Self> {
        Self::new(CommandRole::SenseRequest, technology)
    }

    /// The configuration commands, in the order the reader must receive
    /// them after the ACK handshake.
    pub fn init_sequence(technology: CardTechnology) -> Result<Vec<Self>> {
        [
            CommandRole::SetCommandType,
            CommandRole::SwitchRf,
            CommandRole::SetRfType,
            CommandRole::SetProtocol1,
            CommandRole::SetProtocol2,
        ]
        .into_iter()
        .map(|role| Self::new(role, technology))
        .collect()
    }

    pub fn role(&self) -> CommandRole {
        self.role
    }

    pub fn technology(&self) -> CardTechnology {
        self.technology
    }

    /// Raw payload (command code + parameters), without the direction byte.
    pub fn payload(&self) -> &'static [u8] {
        self.payload
    }
}
