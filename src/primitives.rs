//! Wire-level primitive codecs shared across Information Elements.
//!
//! 3GPP TS 29.244 builds every IE payload out of a handful of primitive
//! encodings: big-endian integers, a 32-bit NTP-style timestamp, DNS-label
//! encoded FQDNs, and IP-address presence-flag octets. Centralizing them here
//! keeps individual IE files focused on their own field layout instead of
//! re-deriving byte arithmetic.

use crate::error::PfcpError;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds between the NTP epoch (1900-01-01T00:00:00Z) and the Unix epoch
/// (1970-01-01T00:00:00Z).
const NTP_EPOCH_OFFSET: u64 = 2_208_988_800;

/// Maximum length of a single DNS label, per RFC 1035.
const MAX_LABEL_LEN: usize = 63;

/// Encodes a [`SystemTime`] as the 4-byte 3GPP timestamp format used by
/// Recovery Time Stamp, Monitoring Time, and the other `*Time` IEs: seconds
/// since the NTP epoch, truncated to 32 bits.
pub fn encode_timestamp(timestamp: SystemTime) -> [u8; 4] {
    let unix_secs = timestamp
        .duration_since(UNIX_EPOCH)
        .expect("timestamp before Unix epoch")
        .as_secs();
    let ntp_secs = unix_secs + NTP_EPOCH_OFFSET;
    (ntp_secs as u32).to_be_bytes()
}

/// Decodes a 4-byte 3GPP timestamp into a [`SystemTime`].
///
/// `ie_name` is used only to label the error if `data` is too short.
pub fn decode_timestamp(ie_name: &str, ie_type: crate::ie::IeType, data: &[u8]) -> Result<SystemTime, PfcpError> {
    if data.len() < 4 {
        return Err(PfcpError::invalid_length(ie_name, ie_type, 4, data.len()));
    }
    let ntp_secs = u32::from_be_bytes(data[0..4].try_into().unwrap()) as u64;
    if ntp_secs < NTP_EPOCH_OFFSET {
        return Err(PfcpError::invalid_value(
            "timestamp",
            ntp_secs,
            "NTP timestamp is before the Unix epoch",
        ));
    }
    let unix_secs = ntp_secs - NTP_EPOCH_OFFSET;
    Ok(UNIX_EPOCH + Duration::from_secs(unix_secs))
}

/// Encodes an FQDN as a sequence of DNS labels: one length-prefixed octet per
/// label, no trailing root label, no dot separators in the output.
///
/// Returns [`PfcpError::MalformedFqdn`] if any label exceeds 63 bytes or the
/// name contains an empty label (e.g. a leading/trailing/doubled dot).
pub fn encode_fqdn(fqdn: &str) -> Result<Vec<u8>, PfcpError> {
    let mut out = Vec::with_capacity(fqdn.len() + 1);
    for label in fqdn.split('.') {
        if label.is_empty() {
            return Err(PfcpError::malformed_fqdn(
                "FQDN",
                "empty label (leading, trailing, or doubled '.')",
            ));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(PfcpError::malformed_fqdn(
                "FQDN",
                format!("label '{}' exceeds {} bytes", label, MAX_LABEL_LEN),
            ));
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    Ok(out)
}

/// Decodes a DNS-label encoded FQDN payload back into a dotted string.
pub fn decode_fqdn(data: &[u8]) -> Result<String, PfcpError> {
    let mut labels = Vec::new();
    let mut pos = 0;
    while pos < data.len() {
        let len = data[pos] as usize;
        pos += 1;
        if len == 0 || pos + len > data.len() {
            return Err(PfcpError::malformed_fqdn(
                "FQDN",
                "label length byte exceeds remaining payload",
            ));
        }
        let label = std::str::from_utf8(&data[pos..pos + len])
            .map_err(|e| PfcpError::malformed_fqdn("FQDN", e.to_string()))?;
        labels.push(label.to_string());
        pos += len;
    }
    Ok(labels.join("."))
}

/// Tests bit `n` (1-indexed, bit 1 is the least significant bit) of `byte`.
pub fn has_bit(byte: u8, n: u8) -> bool {
    debug_assert!((1..=8).contains(&n));
    byte & (1 << (n - 1)) != 0
}

pub fn has_1st_bit(byte: u8) -> bool {
    has_bit(byte, 1)
}
pub fn has_2nd_bit(byte: u8) -> bool {
    has_bit(byte, 2)
}
pub fn has_3rd_bit(byte: u8) -> bool {
    has_bit(byte, 3)
}
pub fn has_4th_bit(byte: u8) -> bool {
    has_bit(byte, 4)
}
pub fn has_5th_bit(byte: u8) -> bool {
    has_bit(byte, 5)
}
pub fn has_6th_bit(byte: u8) -> bool {
    has_bit(byte, 6)
}
pub fn has_7th_bit(byte: u8) -> bool {
    has_bit(byte, 7)
}
pub fn has_8th_bit(byte: u8) -> bool {
    has_bit(byte, 8)
}
