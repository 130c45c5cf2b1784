// src/ie/monitoring_time.rs

//! Monitoring Time Information Element.

use crate::error::PfcpError;
use crate::ie::IeType;
use crate::primitives;
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitoringTime {
    pub timestamp: SystemTime,
}

impl MonitoringTime {
    pub fn new(timestamp: SystemTime) -> Self {
        MonitoringTime { timestamp }
    }

    /// Marshals the Monitoring Time into the 4-byte 3GPP timestamp format.
    pub fn marshal(&self) -> [u8; 4] {
        primitives::encode_timestamp(self.timestamp)
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        let timestamp = primitives::decode_timestamp("Monitoring Time", IeType::MonitoringTime, data)?;
        Ok(MonitoringTime { timestamp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn test_monitoring_time_marshal_unmarshal() {
        let now = SystemTime::now();
        let mt = MonitoringTime::new(now);
        let marshaled = mt.marshal();
        assert_eq!(marshaled.len(), 4);
        let unmarshaled = MonitoringTime::unmarshal(&marshaled).unwrap();

        // We might lose precision, so we compare seconds.
        let original_secs = mt.timestamp.duration_since(UNIX_EPOCH).unwrap().as_secs();
        let unmarshaled_secs = unmarshaled
            .timestamp
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        assert_eq!(original_secs, unmarshaled_secs);
    }

    #[test]
    fn test_monitoring_time_unmarshal_invalid_data() {
        let data = [0; 3];
        let result = MonitoringTime::unmarshal(&data);
        assert!(result.is_err());
        let err = result.unwrap_err();
        if let PfcpError::InvalidLength {
            ie_name,
            ie_type,
            expected,
            actual,
        } = err
        {
            assert_eq!(ie_name, "Monitoring Time");
            assert_eq!(ie_type, IeType::MonitoringTime);
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
        } else {
            panic!("expected InvalidLength");
        }
    }

    #[test]
    fn test_monitoring_time_unmarshal_before_unix_epoch() {
        // NTP timestamp before Unix epoch (less than NTP_EPOCH_OFFSET)
        let data = 1000u32.to_be_bytes();
        let result = MonitoringTime::unmarshal(&data);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, PfcpError::InvalidValue { .. }));
    }

    #[test]
    fn test_monitoring_time_matches_3gpp_reference() {
        use std::time::Duration;
        let t = UNIX_EPOCH + Duration::from_secs(1_704_067_200); // 2024-01-01T00:00:00Z
        let mt = MonitoringTime::new(t);
        assert_eq!(mt.marshal(), [0xE9, 0x3C, 0x7F, 0x00]);
    }
}
