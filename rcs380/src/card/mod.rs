// rcs380-rs/rcs380/src/card/mod.rs

use std::fmt;

use crate::types::{CardTechnology, Idm, Nfcid};

mod info;
pub use info::{FelicaInfo, TypeBInfo};

/// Identifier of the card that answered a sense-request. Produced once per
/// session, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIdentifier {
    Felica(FelicaInfo),
    TypeB(TypeBInfo),
}

impl CardIdentifier {
    pub fn technology(&self) -> CardTechnology {
        match self {
            Self::Felica(_) => CardTechnology::Felica,
            Self::TypeB(_) => CardTechnology::TypeB,
        }
    }

    pub fn idm(&self) -> Option<&Idm> {
        match self {
            Self::Felica(info) => Some(info.idm()),
            Self::TypeB(_) => None,
        }
    }

    pub fn nfcid(&self) -> Option<&Nfcid> {
        match self {
            Self::TypeB(info) => Some(info.nfcid()),
            Self::Felica(_) => None,
        }
    }

    pub fn as_felica(&self) -> Option<&FelicaInfo> {
        match self {
            Self::Felica(info) => Some(info),
            Self::TypeB(_) => None,
        }
    }

    pub fn as_type_b(&self) -> Option<&TypeBInfo> {
        match self {
            Self::TypeB(info) => Some(info),
            Self::Felica(_) => None,
        }
    }
}

/// One line per field, as printed by the scan tool.
impl fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Felica(info) => {
                writeln!(f, " IDm: {}", info.idm.to_hex())?;
                write!(f, " PMm: {}", info.pmm.to_hex())
            }
            Self::TypeB(info) => {
                writeln!(f, " NFCID: {}", info.nfcid.to_hex())?;
                writeln!(f, " Application Data: {}", info.application_data.to_hex())?;
                write!(f, " Protocol Info: {}", info.protocol_info.to_hex())
            }
        }
    }
}
