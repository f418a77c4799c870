// rcs380-rs/rcs380/src/types.rs

use std::convert::TryFrom;
use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// Card technology the reader is configured for. Fixed for the lifetime of
/// a session.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardTechnology {
    /// FeliCa (NFC Type-F), 212 kbps
    #[display(fmt = "Type-F")]
    Felica,
    /// ISO/IEC 14443 Type-B, 106 kbps
    #[display(fmt = "Type-B")]
    TypeB,
}

impl Default for CardTechnology {
    fn default() -> Self {
        CardTechnology::Felica
    }
}

impl TryFrom<char> for CardTechnology {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'F' => Ok(Self::Felica),
            'B' => Ok(Self::TypeB),
            other => Err(Error::UnsupportedTechnology(other.to_string())),
        }
    }
}

impl FromStr for CardTechnology {
    type Err = Error;

    /// Accepts `F`, `B`, `-F` and `-B`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.strip_prefix('-').unwrap_or(s);
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::UnsupportedTechnology(s.to_string())),
        }
    }
}

/// Role of a reader command in the initialization/poll sequence.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandRole {
    #[display(fmt = "ack")]
    Ack,
    #[display(fmt = "set-command-type")]
    SetCommandType,
    #[display(fmt = "switch-rf")]
    SwitchRf,
    #[display(fmt = "set-rf-type")]
    SetRfType,
    #[display(fmt = "set-protocol-1")]
    SetProtocol1,
    #[display(fmt = "set-protocol-2")]
    SetProtocol2,
    #[display(fmt = "sense-request")]
    SenseRequest,
}

impl CommandRole {
    /// Whether the command payload differs between card technologies.
    pub fn is_technology_specific(&self) -> bool {
        matches!(
            self,
            Self::SetRfType | Self::SetProtocol2 | Self::SenseRequest
        )
    }
}

/// Bulk endpoint addresses discovered from the reader's descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderEndpoints {
    /// Bulk IN address (direction bit 0x80 set)
    pub bulk_in: u8,
    /// Bulk OUT address
    pub bulk_out: u8,
}

impl ReaderEndpoints {
    pub const fn new(bulk_in: u8, bulk_out: u8) -> Self {
        Self { bulk_in, bulk_out }
    }

    /// Classify bulk endpoint addresses by their direction bit (0x80 = IN).
    /// The first address seen in each direction wins; `None` unless both
    /// directions are present.
    pub fn from_bulk_addresses<I>(addresses: I) -> Option<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut bulk_in = None;
        let mut bulk_out = None;
        for addr in addresses {
            if addr & 0x80 != 0 {
                bulk_in.get_or_insert(addr);
            } else {
                bulk_out.get_or_insert(addr);
            }
        }
        Some(Self::new(bulk_in?, bulk_out?))
    }
}

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            pub fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                crate::utils::bytes_to_hex(self.as_bytes())
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                let arr: [u8; $len] = bytes.try_into().map_err(|_| Error::InvalidLength {
                    expected: $len,
                    actual: bytes.len(),
                })?;
                Ok(Self(arr))
            }
        }
    };
}

fixed_bytes!(
    /// IDm - FeliCa manufacture identifier (8 バイト)
    Idm,
    8
);
fixed_bytes!(
    /// PMm - FeliCa manufacture parameters (8 バイト)
    Pmm,
    8
);
fixed_bytes!(
    /// Type-B PUPI (4 バイト)
    Nfcid,
    4
);
fixed_bytes!(
    /// Type-B ATQB application data (4 バイト)
    ApplicationData,
    4
);
fixed_bytes!(
    /// Type-B ATQB protocol info (4 バイト)
    ProtocolInfo,
    4
);
