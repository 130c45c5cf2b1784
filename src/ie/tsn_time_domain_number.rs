//! TSN Time Domain Number Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.150, contains the TSN time domain number
//! as a single u8 value for Time-Sensitive Networking.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TsnTimeDomainNumber {
    pub value: u8,
}

impl TsnTimeDomainNumber {
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [self.value]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "TSN Time Domain Number",
                IeType::TsnTimeDomainNumber,
                1,
                0,
            ));
        }
        Ok(Self { value: data[0] })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::TsnTimeDomainNumber, self.marshal().to_vec())
    }
}
