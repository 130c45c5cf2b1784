//! Static tables describing which IE types carry nested (grouped) IEs,
//! and the standard parent/child relationships between them.
//!
//! 3GPP TS 29.244 marks a subset of Information Elements as "Grouped":
//! their payload is itself a sequence of TLV-encoded IEs rather than a
//! scalar value. This module centralizes that classification so the
//! generic accessor layer in [`crate::ie::access`] can recurse into a
//! grouped IE without every call site re-deriving the table by hand.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Default recursion limit for [`unmarshal_grouped_tree`].
///
/// PFCP grouped IEs nest at most a handful of levels deep in practice
/// (e.g. CreatePDR -> PDI -> Ethernet Packet Filter); a limit of 8 is
/// generous headroom while still bounding a malicious or corrupted
/// payload from recursing without end.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Reports whether `ie_type` is a Grouped IE per 3GPP TS 29.244 Table 8.1.1,
/// i.e. whether its payload should be parsed as a nested IE sequence rather
/// than a scalar.
pub fn is_grouped(ie_type: IeType) -> bool {
    matches!(
        ie_type,
        IeType::CreatePdr
            | IeType::Pdi
            | IeType::CreateFar
            | IeType::ForwardingParameters
            | IeType::DuplicatingParameters
            | IeType::CreateUrr
            | IeType::CreateQer
            | IeType::CreatedPdr
            | IeType::UpdatePdr
            | IeType::UpdateFar
            | IeType::UpdateForwardingParameters
            | IeType::UpdateBarWithinSessionReportResponse
            | IeType::UpdateUrr
            | IeType::UpdateQer
            | IeType::RemovePdr
            | IeType::RemoveFar
            | IeType::RemoveUrr
            | IeType::RemoveQer
            | IeType::LoadControlInformation
            | IeType::OverloadControlInformation
            | IeType::ApplicationIdsPfds
            | IeType::QueryUrr
            | IeType::UsageReportWithinSessionModificationResponse
            | IeType::UsageReportWithinSessionDeletionResponse
            | IeType::UsageReportWithinSessionReportRequest
            | IeType::DownlinkDataReport
            | IeType::CreateBar
            | IeType::UpdateBar
            | IeType::RemoveBar
            | IeType::ErrorIndicationReport
            | IeType::UserPlanePathFailureReport
            | IeType::UserPlanePathRecoveryReport
            | IeType::CreateTrafficEndpoint
            | IeType::CreatedTrafficEndpoint
            | IeType::UpdateTrafficEndpoint
            | IeType::RemoveTrafficEndpoint
            | IeType::AdditionalMonitoringTime
            | IeType::JoinIpMulticastInformationWithinUsageReport
            | IeType::LeaveIpMulticastInformationWithinUsageReport
    )
}

/// Returns the standard parent IE types that may directly contain an IE
/// of type `ie_type`, per 3GPP TS 29.244's per-message grouped-IE tables.
///
/// An empty slice means `ie_type` is only ever found at the top level of a
/// message, not nested inside another IE.
pub fn parents_of(ie_type: IeType) -> &'static [IeType] {
    match ie_type {
        IeType::Pdi | IeType::UrrId | IeType::QerId | IeType::FarId | IeType::PdrId => &[
            IeType::CreatePdr,
            IeType::UpdatePdr,
            IeType::CreatedPdr,
            IeType::RemovePdr,
        ],
        IeType::ForwardingParameters | IeType::DuplicatingParameters => {
            &[IeType::CreateFar, IeType::UpdateFar]
        }
        IeType::Fteid => &[IeType::Pdi, IeType::CreatePdr],
        IeType::DataStatus => &[IeType::DownlinkDataReport],
        IeType::MonitoringTime => &[
            IeType::CreateUrr,
            IeType::UpdateUrr,
            IeType::AdditionalMonitoringTime,
        ],
        IeType::InactivityDetectionTime | IeType::VolumeThreshold | IeType::TimeThreshold => {
            &[IeType::CreateUrr, IeType::UpdateUrr]
        }
        IeType::MptcpControlInformation => &[IeType::ProvideAtsssControlInformation],
        IeType::CreatePdr
        | IeType::CreateFar
        | IeType::CreateUrr
        | IeType::CreateQer
        | IeType::CreateBar
        | IeType::CreateTrafficEndpoint => &[],
        _ => &[],
    }
}

/// Recursively unmarshals `ie`'s payload as a tree of child IEs up to
/// `max_depth` levels, caching each level's children via [`Ie::as_ies`].
///
/// Non-grouped IEs are left untouched (no children to parse). Returns
/// an error if the payload is malformed or the nesting exceeds `max_depth`.
pub fn unmarshal_grouped_tree(ie: &mut Ie, max_depth: usize) -> Result<(), PfcpError> {
    if !is_grouped(ie.ie_type) {
        return Ok(());
    }
    if max_depth == 0 {
        return Err(PfcpError::invalid_value(
            "grouped IE depth",
            format!("{:?}", ie.ie_type),
            "exceeded maximum grouped IE nesting depth",
        ));
    }

    for child in ie.as_ies_mut()?.iter_mut() {
        unmarshal_grouped_tree(child, max_depth - 1)?;
    }
    Ok(())
}
