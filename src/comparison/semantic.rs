//! Semantic comparison for specific IE types.
//!
//! Provides functional equivalence comparison for IEs where byte-for-byte
//! matching is too strict. Semantic comparison focuses on the meaningful
//! fields that determine the IE's function, ignoring implementation-specific
//! encoding details.

use crate::ie::f_teid::Fteid;
use crate::ie::recovery_time_stamp::RecoveryTimeStamp;
use crate::ie::ue_ip_address::UeIpAddress;
use crate::ie::IeType;
use std::io;
use std::time::Duration;

/// Result of semantic comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticMatch {
    /// IEs are semantically equivalent
    Match,
    /// IEs differ semantically
    Mismatch { details: String },
}

impl SemanticMatch {
    /// Returns true if the IEs match semantically.
    pub fn is_match(&self) -> bool {
        matches!(self, SemanticMatch::Match)
    }

    /// Get the mismatch details if available.
    pub fn details(&self) -> Option<&str> {
        match self {
            SemanticMatch::Match => None,
            SemanticMatch::Mismatch { details } => Some(details),
        }
    }
}

/// Compare two IE payloads semantically based on their type.
///
/// Returns `Some(SemanticMatch)` if semantic comparison is supported for this IE type,
/// or `None` if semantic comparison is not available (should fall back to exact comparison).
///
/// For timestamp IEs, provide `timestamp_tolerance_secs` to allow comparison within a
/// tolerance window.
pub fn compare_semantically(
    ie_type: IeType,
    left_payload: &[u8],
    right_payload: &[u8],
) -> Result<Option<SemanticMatch>, io::Error> {
    compare_semantically_with_tolerance(ie_type, left_payload, right_payload, None)
}

/// Compare two IE payloads semantically with optional timestamp tolerance.
///
/// Returns `Some(SemanticMatch)` if semantic comparison is supported for this IE type,
/// or `None` if semantic comparison is not available (should fall back to exact comparison).
pub fn compare_semantically_with_tolerance(
    ie_type: IeType,
    left_payload: &[u8],
    right_payload: &[u8],
    timestamp_tolerance_secs: Option<u32>,
) -> Result<Option<SemanticMatch>, io::Error> {
    match ie_type {
        IeType::Fteid => {
            let left = Fteid::unmarshal(left_payload)?;
            let right = Fteid::unmarshal(right_payload)?;
            Ok(Some(compare_fteid(&left, &right)))
        }
        IeType::UeIpAddress => {
            let left = UeIpAddress::unmarshal(left_payload)?;
            let right = UeIpAddress::unmarshal(right_payload)?;
            Ok(Some(compare_ue_ip_address(&left, &right)))
        }
        // Timestamp IEs with tolerance support
        IeType::RecoveryTimeStamp
        | IeType::StartTime
        | IeType::EndTime
        | IeType::TimeOfFirstPacket
        | IeType::TimeOfLastPacket
        | IeType::ActivationTime
        | IeType::DeactivationTime
        | IeType::MonitoringTime => {
            if let Some(tolerance_secs) = timestamp_tolerance_secs {
                let left = RecoveryTimeStamp::unmarshal(left_payload)?;
                let right = RecoveryTimeStamp::unmarshal(right_payload)?;
                Ok(Some(compare_timestamp(&left, &right, tolerance_secs)))
            } else {
                // No tolerance specified, fall back to exact comparison
                Ok(None)
            }
        }
        _ => Ok(None), // No semantic comparison available for this type
    }
}

/// Compare F-TEID semantically.
///
/// F-TEID semantic comparison focuses on:
/// - TEID value (tunnel endpoint identifier)
/// - IP addresses (IPv4 and/or IPv6)
/// - CHOOSE flags (ch and chid)
/// - Choose ID (if CHID is set)
///
/// Ignores:
/// - v4/v6 flags (derived from presence of IP addresses)
///
/// # Rationale
///
/// Per 3GPP TS 29.244 Section 8.2.3, F-TEID contains:
/// - TEID: Tunnel Endpoint Identifier (mandatory for function)
/// - IP addresses: IPv4/IPv6 addresses (functional requirement)
/// - CHOOSE flags: Request UPF to allocate TEID/IP (functional)
/// - v4/v6 flags: Just indicate which addresses are present (encoding detail)
///
/// The v4/v6 flags are redundant with the actual address presence, so
/// different implementations might set them differently. We ignore them
/// for semantic comparison.
fn compare_fteid(left: &Fteid, right: &Fteid) -> SemanticMatch {
    // Compare TEID
    if left.teid != right.teid {
        return SemanticMatch::Mismatch {
            details: format!("TEID differs: {} vs {}", left.teid, right.teid),
        };
    }

    // Compare IPv4 address
    if left.ipv4_address != right.ipv4_address {
        return SemanticMatch::Mismatch {
            details: format!(
                "IPv4 address differs: {:?} vs {:?}",
                left.ipv4_address, right.ipv4_address
            ),
        };
    }

    // Compare IPv6 address
    if left.ipv6_address != right.ipv6_address {
        return SemanticMatch::Mismatch {
            details: format!(
                "IPv6 address differs: {:?} vs {:?}",
                left.ipv6_address, right.ipv6_address
            ),
        };
    }

    // Compare CHOOSE flag
    if left.ch != right.ch {
        return SemanticMatch::Mismatch {
            details: format!("CHOOSE flag differs: {} vs {}", left.ch, right.ch),
        };
    }

    // Compare CHOOSE ID flag
    if left.chid != right.chid {
        return SemanticMatch::Mismatch {
            details: format!("CHOOSE ID flag differs: {} vs {}", left.chid, right.chid),
        };
    }

    // Compare choose_id only if CHID flag is set
    if left.chid && left.choose_id != right.choose_id {
        return SemanticMatch::Mismatch {
            details: format!(
                "Choose ID differs: {} vs {}",
                left.choose_id, right.choose_id
            ),
        };
    }

    SemanticMatch::Match
}

/// Compare UE IP Address semantically.
///
/// UE IP Address semantic comparison focuses on:
/// - IP addresses (IPv4 and/or IPv6)
///
/// Ignores:
/// - v4/v6 flags (derived from presence of IP addresses)
///
/// # Rationale
///
/// Per 3GPP TS 29.244 Section 8.2.62, UE IP Address contains:
/// - IPv4/IPv6 addresses: The actual UE IP addresses (functional requirement)
/// - v4/v6 flags: Just indicate which addresses are present (encoding detail)
///
/// The v4/v6 flags are redundant with the actual address presence, so
/// different implementations might set them differently. We ignore them
/// for semantic comparison, focusing only on the actual IP addresses.
fn compare_ue_ip_address(left: &UeIpAddress, right: &UeIpAddress) -> SemanticMatch {
    // Compare IPv4 address
    if left.ipv4_address != right.ipv4_address {
        return SemanticMatch::Mismatch {
            details: format!(
                "IPv4 address differs: {:?} vs {:?}",
                left.ipv4_address, right.ipv4_address
            ),
        };
    }

    // Compare IPv6 address
    if left.ipv6_address != right.ipv6_address {
        return SemanticMatch::Mismatch {
            details: format!(
                "IPv6 address differs: {:?} vs {:?}",
                left.ipv6_address, right.ipv6_address
            ),
        };
    }

    SemanticMatch::Match
}

/// Compare timestamps with tolerance.
///
/// Compares two timestamps and considers them equal if they are within the
/// specified tolerance window (in seconds).
///
/// # Arguments
///
/// * `left` - First timestamp
/// * `right` - Second timestamp
/// * `tolerance_secs` - Maximum allowed difference in seconds
///
/// # Examples
///
/// ```ignore
/// // Internal function - use compare_semantically_with_tolerance instead
/// use rs_pfcp::comparison::semantic::compare_timestamp;
/// use rs_pfcp::ie::recovery_time_stamp::RecoveryTimeStamp;
/// use std::time::{SystemTime, Duration};
///
/// let time1 = RecoveryTimeStamp::new(SystemTime::now());
/// let time2 = RecoveryTimeStamp::new(SystemTime::now() + Duration::from_secs(3));
///
/// // Within 5 second tolerance - should match
/// let result = compare_timestamp(&time1, &time2, 5);
/// assert!(result.is_match());
///
/// // Outside 2 second tolerance - should not match
/// let result = compare_timestamp(&time1, &time2, 2);
/// assert!(!result.is_match());
/// ```
fn compare_timestamp(
    left: &RecoveryTimeStamp,
    right: &RecoveryTimeStamp,
    tolerance_secs: u32,
) -> SemanticMatch {
    // Calculate absolute difference between timestamps
    let diff = match left.timestamp.duration_since(right.timestamp) {
        Ok(duration) => duration,
        Err(e) => e.duration(), // Time went backwards, get absolute difference
    };

    let tolerance = Duration::from_secs(tolerance_secs as u64);

    if diff <= tolerance {
        SemanticMatch::Match
    } else {
        SemanticMatch::Mismatch {
            details: format!(
                "timestamps differ by {} seconds (tolerance: {} seconds)",
                diff.as_secs(),
                tolerance_secs
            ),
        }
    }
}
