//! PFCPASReq-Flags Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.186, contains flags for
//! PFCP Association Setup Request.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct PfcpasReqFlags: u8 {
        const UUPSI = 1 << 0; // Bit 1: UPF User Plane Security Indication
    }
}

impl PfcpasReqFlags {
    pub fn marshal(&self) -> [u8; 1] {
        [self.bits()]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "PFCPASReq-Flags",
                IeType::PfcpasReqFlags,
                1,
                0,
            ));
        }
        Ok(PfcpasReqFlags::from_bits_truncate(data[0]))
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::PfcpasReqFlags, self.marshal().to_vec())
    }
}
