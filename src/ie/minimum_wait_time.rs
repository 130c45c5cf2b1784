//! Minimum Wait Time Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.170, carries the minimum wait time in
//! seconds between two consecutive QoS monitoring reports.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Minimum Wait Time IE.
///
/// Specifies the minimum number of seconds that must elapse between two
/// consecutive QoS monitoring reports.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.170
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumWaitTime {
    /// Wait time in seconds
    pub seconds: u32,
}

impl MinimumWaitTime {
    pub fn new(seconds: u32) -> Self {
        Self { seconds }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.seconds.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Minimum Wait Time",
                IeType::MinimumWaitTime,
                4,
                data.len(),
            ));
        }
        Ok(Self {
            seconds: u32::from_be_bytes([data[0], data[1], data[2], data[3]]),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::MinimumWaitTime, self.marshal().to_vec())
    }
}
