//! GTP-U Path Interface Type Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.166, indicates whether the GTP-U path
//! is on an N9 or N3 interface.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};
use bitflags::bitflags;

bitflags! {
    /// GTP-U Path Interface Type flags.
    ///
    /// # 3GPP Reference
    /// 3GPP TS 29.244 Section 8.2.166
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct GtpuPathInterfaceType: u8 {
        /// N9: GTP-U path is on an N9 interface
        const N9 = 1 << 0;
        /// N3: GTP-U path is on an N3 interface
        const N3 = 1 << 1;
    }
}

impl GtpuPathInterfaceType {
    pub fn marshal(&self) -> [u8; 1] {
        [self.bits()]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "GTP-U Path Interface Type",
                IeType::GtpuPathInterfaceType,
                1,
                0,
            ));
        }
        Ok(GtpuPathInterfaceType::from_bits_truncate(data[0]))
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::GtpuPathInterfaceType, self.marshal().to_vec())
    }
}
