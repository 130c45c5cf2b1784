//! Subsequent Event Threshold Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.115, contains the subsequent event threshold
//! for event-based reporting after the initial threshold is reached.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsequentEventThreshold {
    pub value: u32,
}

impl SubsequentEventThreshold {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Subsequent Event Threshold",
                IeType::SubsequentEventThreshold,
                4,
                data.len(),
            ));
        }
        Ok(Self {
            value: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::SubsequentEventThreshold, self.marshal().to_vec())
    }
}
