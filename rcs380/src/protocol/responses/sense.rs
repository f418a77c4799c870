// rcs380-rs/rcs380/src/protocol/responses/sense.rs

//! Interpretation of the reader's reply to a sense-request.
//!
//! Decoded payload layout (offsets after the 0xD7 direction byte):
//! `05 | status(4) | ...` followed by the card's own response. For FeliCa the
//! card response starts at offset 6 with `length(0x14) 01 IDm(8) PMm(8)`; for
//! Type-B it is the ATQB: `0x50 PUPI(4) AppData(4) ProtInfo(3..4)`.

use log::debug;

use crate::card::{CardIdentifier, FelicaInfo, TypeBInfo};
use crate::constants::{SENSE_STATUS_CARD_PRESENT, SENSE_STATUS_OFFSETS};
use crate::protocol::parser::field_at;
use crate::types::{ApplicationData, CardTechnology, Idm, Nfcid, Pmm, ProtocolInfo};
use crate::Result;

const FELICA_LEN_OFFSET: usize = 6;
const FELICA_RESPONSE_LEN: u8 = 0x14;
const FELICA_POLLING_RESPONSE: u8 = 0x01;
const FELICA_IDM_OFFSET: usize = 8;
const FELICA_PMM_OFFSET: usize = 16;

const TYPE_B_ATQB_OFFSET: usize = 6;
const TYPE_B_ATQB: u8 = 0x50;
const TYPE_B_NFCID_OFFSET: usize = 7;
const TYPE_B_APP_DATA_OFFSET: usize = 11;
const TYPE_B_PROTOCOL_INFO_OFFSET: usize = 15;

/// Result of one sense-request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenseOutcome {
    /// Status bytes did not report a card; poll again.
    NoCard,
    /// A card answered and its identifier was extracted.
    Detected(CardIdentifier),
    /// Status reported a card but the payload matched no known layout.
    Unrecognized,
}

/// Check the status bytes at raw-frame offsets 9 and 10. A frame too short
/// to carry them reports no card.
pub fn card_present(raw: &[u8]) -> bool {
    let (a, b) = SENSE_STATUS_OFFSETS;
    matches!(
        (raw.get(a), raw.get(b)),
        (Some(&s1), Some(&s2)) if (s1, s2) == SENSE_STATUS_CARD_PRESENT
    )
}

/// Extract the identifier for `technology` from a decoded sense payload.
/// Returns `Ok(None)` when the technology marker is absent or the payload
/// ends before the last identifier field, e.g. an ATQB with a 3-byte
/// ProtInfo.
pub fn extract_identifier(
    technology: CardTechnology,
    payload: &[u8],
) -> Result<Option<CardIdentifier>> {
    match technology {
        CardTechnology::Felica => {
            let marker = (
                payload.get(FELICA_LEN_OFFSET).copied(),
                payload.get(FELICA_LEN_OFFSET + 1).copied(),
            );
            if marker != (Some(FELICA_RESPONSE_LEN), Some(FELICA_POLLING_RESPONSE)) {
                return Ok(None);
            }
            if !fields_fit(payload, FELICA_PMM_OFFSET + Pmm::LEN) {
                return Ok(None);
            }
            let idm: Idm = field_at(payload, FELICA_IDM_OFFSET, Idm::LEN)?;
            let pmm: Pmm = field_at(payload, FELICA_PMM_OFFSET, Pmm::LEN)?;
            Ok(Some(CardIdentifier::Felica(FelicaInfo::new(idm, pmm))))
        }
        CardTechnology::TypeB => {
            if payload.get(TYPE_B_ATQB_OFFSET) != Some(&TYPE_B_ATQB) {
                return Ok(None);
            }
            if !fields_fit(payload, TYPE_B_PROTOCOL_INFO_OFFSET + ProtocolInfo::LEN) {
                return Ok(None);
            }
            let nfcid: Nfcid = field_at(payload, TYPE_B_NFCID_OFFSET, Nfcid::LEN)?;
            let app: ApplicationData =
                field_at(payload, TYPE_B_APP_DATA_OFFSET, ApplicationData::LEN)?;
            let info: ProtocolInfo =
                field_at(payload, TYPE_B_PROTOCOL_INFO_OFFSET, ProtocolInfo::LEN)?;
            Ok(Some(CardIdentifier::TypeB(TypeBInfo::new(nfcid, app, info))))
        }
    }
}

fn fields_fit(payload: &[u8], needed: usize) -> bool {
    if payload.len() < needed {
        debug!("sense payload too short: {} < {} bytes", payload.len(), needed);
        return false;
    }
    true
}

impl SenseOutcome {
    /// Interpret a raw sense-request response: `decode` turns the raw frame
    /// into its payload and is only invoked when the status bytes report a
    /// card.
    pub fn evaluate<F>(technology: CardTechnology, raw: &[u8], decode: F) -> Result<Self>
    where
        F: FnOnce(&[u8]) -> Result<Vec<u8>>,
    {
        if !card_present(raw) {
            return Ok(Self::NoCard);
        }
        let payload = decode(raw)?;
        Ok(match extract_identifier(technology, &payload)? {
            Some(id) => Self::Detected(id),
            None => Self::Unrecognized,
        })
    }
}
