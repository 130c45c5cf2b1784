use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalUsageReportsInformation {
    pub flags: u8,
}

impl AdditionalUsageReportsInformation {
    pub fn new(flags: u8) -> Self {
        Self { flags }
    }

    // Flag checking methods based on 3GPP TS 29.244
    pub fn has_auri(&self) -> bool {
        (self.flags & 0x01) != 0
    }

    pub fn has_nouri(&self) -> bool {
        (self.flags & 0x02) != 0
    }

    // Convenience constructors
    pub fn with_auri() -> Self {
        Self::new(0x01)
    }

    pub fn with_nouri() -> Self {
        Self::new(0x02)
    }

    pub fn with_both_flags() -> Self {
        Self::new(0x03) // AURI | NOURI
    }

    pub fn marshal_len(&self) -> usize {
        1 // u8 for flags
    }

    pub fn marshal(&self) -> Vec<u8> {
        vec![self.flags]
    }

    pub fn marshal_to(&self, buf: &mut Vec<u8>) {
        buf.push(self.flags);
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "Additional Usage Reports Information",
                IeType::AdditionalUsageReportsInformation,
                1,
                0,
            ));
        }

        let flags = data[0];
        Ok(Self { flags })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::AdditionalUsageReportsInformation, self.marshal())
    }
}
