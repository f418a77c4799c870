// rcs380-rs/rcs380/src/protocol/commands/templates.rs

//! Fixed command payloads, keyed by (role, technology). Entries with no
//! technology apply to every technology.

use crate::types::{CardTechnology, CommandRole};

pub(crate) struct Template {
    pub role: CommandRole,
    pub technology: Option<CardTechnology>,
    pub bytes: &'static [u8],
}

const fn any(role: CommandRole, bytes: &'static [u8]) -> Template {
    Template {
        role,
        technology: None,
        bytes,
    }
}

const fn only(role: CommandRole, technology: CardTechnology, bytes: &'static [u8]) -> Template {
    Template {
        role,
        technology: Some(technology),
        bytes,
    }
}

use CardTechnology::{Felica, TypeB};
use CommandRole::*;

pub(crate) static TEMPLATES: &[Template] = &[
    any(SetCommandType, &[0x2A, 0x01]),
    any(SwitchRf, &[0x06, 0x00]),
    // InSetRF: 212 kbps FeliCa
    only(SetRfType, Felica, &[0x00, 0x01, 0x01, 0x0F, 0x01]),
    // InSetRF: 106 kbps Type-B
    only(SetRfType, TypeB, &[0x00, 0x03, 0x07, 0x0F, 0x07]),
    any(
        SetProtocol1,
        &[
            0x02, 0x00, 0x18, 0x01, 0x01, 0x02, 0x01, 0x03, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06,
            0x00, 0x07, 0x08, 0x08, 0x00, 0x09, 0x00, 0x0A, 0x00, 0x0B, 0x00, 0x0C, 0x00, 0x0E,
            0x04, 0x0F, 0x00, 0x10, 0x00, 0x11, 0x00, 0x12, 0x00, 0x13, 0x06,
        ],
    ),
    only(SetProtocol2, Felica, &[0x02, 0x00, 0x18]),
    only(
        SetProtocol2,
        TypeB,
        &[0x02, 0x00, 0x14, 0x09, 0x01, 0x0A, 0x01, 0x0B, 0x01, 0x0C, 0x01],
    ),
    // InCommRF, timeout 0x006E, FeliCa Polling (system code FFFF, request code 1)
    only(
        SenseRequest,
        Felica,
        &[0x04, 0x6E, 0x00, 0x06, 0x00, 0xFF, 0xFF, 0x01, 0x00],
    ),
    // InCommRF, timeout 0x006E, REQB (AFI 0x00, param 0x10)
    only(SenseRequest, TypeB, &[0x04, 0x6E, 0x00, 0x05, 0x00, 0x10]),
];

/// Find the payload for `role` under `technology`.
pub(crate) fn lookup(role: CommandRole, technology: CardTechnology) -> Option<&'static [u8]> {
    TEMPLATES
        .iter()
        .find(|t| t.role == role && t.technology.map_or(true, |tech| tech == technology))
        .map(|t| t.bytes)
}
