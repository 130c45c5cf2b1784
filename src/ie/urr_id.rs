//! URR ID IE.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Represents a URR ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrrId {
    pub id: u32,
}

impl UrrId {
    /// Creates a new URR ID.
    pub fn new(id: u32) -> Self {
        UrrId { id }
    }

    /// Marshals the URR ID into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        self.id.to_be_bytes().to_vec()
    }

    /// Unmarshals a byte slice into a URR ID.
    ///
    /// Per 3GPP TS 29.244, URR ID requires exactly 4 bytes (u32).
    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        if payload.len() < 4 {
            return Err(PfcpError::invalid_length(
                "URR ID",
                IeType::UrrId,
                4,
                payload.len(),
            ));
        }
        Ok(UrrId {
            id: u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]),
        })
    }

    /// Wraps the URR ID in a UrrId IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UrrId, self.marshal())
    }
}
