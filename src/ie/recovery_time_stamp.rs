// src/ie/recovery_time_stamp.rs
use crate::error::PfcpError;
use crate::ie::IeType;
use crate::primitives;
use std::time::SystemTime;

/// Represents a Recovery Time Stamp Information Element.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RecoveryTimeStamp {
    pub timestamp: SystemTime,
}

impl RecoveryTimeStamp {
    /// Creates a new RecoveryTimeStamp.
    pub fn new(timestamp: SystemTime) -> Self {
        RecoveryTimeStamp { timestamp }
    }

    /// Marshals the RecoveryTimeStamp into a 4-byte array.
    pub fn marshal(&self) -> [u8; 4] {
        primitives::encode_timestamp(self.timestamp)
    }

    /// Unmarshals a 4-byte slice into a RecoveryTimeStamp.
    ///
    /// Per 3GPP TS 29.244, Recovery Time Stamp requires exactly 4 bytes (NTP timestamp).
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        let timestamp =
            primitives::decode_timestamp("Recovery Time Stamp", IeType::RecoveryTimeStamp, data)?;
        Ok(RecoveryTimeStamp { timestamp })
    }
}
