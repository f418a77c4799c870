use crate::types::{ApplicationData, Idm, Nfcid, Pmm, ProtocolInfo};

/// Identifier fields of a FeliCa card (IDm/PMm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FelicaInfo {
    pub idm: Idm,
    pub pmm: Pmm,
}

impl FelicaInfo {
    pub fn new(idm: Idm, pmm: Pmm) -> Self {
        Self { idm, pmm }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }
}

/// Identifier fields of a Type-B card, taken from its ATQB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBInfo {
    pub nfcid: Nfcid,
    pub application_data: ApplicationData,
    pub protocol_info: ProtocolInfo,
}

impl TypeBInfo {
    pub fn new(nfcid: Nfcid, application_data: ApplicationData, protocol_info: ProtocolInfo) -> Self {
        Self {
            nfcid,
            application_data,
            protocol_info,
        }
    }

    pub fn nfcid(&self) -> &Nfcid {
        &self.nfcid
    }

    pub fn application_data(&self) -> &ApplicationData {
        &self.application_data
    }

    pub fn protocol_info(&self) -> &ProtocolInfo {
        &self.protocol_info
    }
}
