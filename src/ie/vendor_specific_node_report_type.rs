//! Vendor Specific Node Report Type Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.217, carries a vendor Enterprise ID and
//! a vendor-specific node report type bitmask.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Vendor Specific Node Report Type IE.
///
/// Contains a 16-bit Enterprise ID followed by a 1-byte bitmask of
/// vendor-specific node report type flags.
///
/// # Wire Format
/// - Octets 5â€“6: Enterprise ID (u16, big-endian)
/// - Octet 7: Vendor-specific flags (u8)
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.217
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorSpecificNodeReportType {
    /// Enterprise ID (IANA Private Enterprise Number)
    pub enterprise_id: u16,
    /// Vendor-specific node report type flags
    pub flags: u8,
}

impl VendorSpecificNodeReportType {
    pub fn new(enterprise_id: u16, flags: u8) -> Self {
        Self {
            enterprise_id,
            flags,
        }
    }

    pub fn marshal(&self) -> [u8; 3] {
        let eid = self.enterprise_id.to_be_bytes();
        [eid[0], eid[1], self.flags]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 3 {
            return Err(PfcpError::invalid_length(
                "Vendor Specific Node Report Type",
                IeType::VendorSpecificNodeReportType,
                3,
                data.len(),
            ));
        }
        Ok(Self {
            enterprise_id: u16::from_be_bytes([data[0], data[1]]),
            flags: data[2],
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(
            IeType::VendorSpecificNodeReportType,
            self.marshal().to_vec(),
        )
    }
}
