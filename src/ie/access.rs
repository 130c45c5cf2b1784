//! Generic, type-driven accessor layer over the `Ie`/`IeType` TLV tree.
//!
//! The per-IE modules (`node_id`, `cause`, `f_teid`, ...) already expose
//! strongly typed structs with their own `unmarshal`, and most messages
//! expose bespoke typed accessors built on top of those. This module adds
//! the complementary generic contract: given any `Ie`, decode the scalar
//! value `T` it carries without the caller needing to already know whether
//! `T` sits directly on that IE or one level down inside a grouped parent.
//!
//! Three-way contract for `get::<T>(ie)`:
//! 1. `ie.ie_type == T::IE_TYPE` — decode `ie.payload` directly.
//! 2. `ie.ie_type` is a legal parent of `T` (per [`crate::ie::catalogue::parents_of`])
//!    — parse `ie` as grouped, decode the first child of type `T`.
//! 3. Otherwise — fail with [`PfcpError::InvalidType`].

use crate::error::PfcpError;
use crate::ie::catalogue;
use crate::ie::{Ie, IeType};

/// A scalar (non-grouped) IE type that can be decoded from a payload slice.
///
/// Implemented for the per-IE structs the generic accessor layer needs to
/// reach through one level of grouping (see `src/ie/*.rs` for the
/// type-specific `unmarshal`s this delegates to).
pub trait ScalarIe: Sized {
    const IE_TYPE: IeType;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError>;
}

/// Decodes `T` from `ie`, descending one level into a grouped parent if
/// `ie` itself is not of type `T` but legally contains it.
pub fn get<T: ScalarIe>(ie: &Ie) -> Result<T, PfcpError> {
    if ie.ie_type == T::IE_TYPE {
        return T::decode(&ie.payload);
    }

    if catalogue::parents_of(T::IE_TYPE).contains(&ie.ie_type) {
        let mut parent = ie.clone();
        catalogue::unmarshal_grouped_tree(&mut parent, catalogue::DEFAULT_MAX_DEPTH)?;
        let child = parent
            .as_ies()?
            .iter()
            .find(|c| c.ie_type == T::IE_TYPE)
            .ok_or_else(|| PfcpError::ie_not_found(T::IE_TYPE, format!("{:?}", ie.ie_type)))?;
        return T::decode(&child.payload);
    }

    Err(PfcpError::invalid_type(
        format!("{:?}", ie.ie_type),
        ie.ie_type as u16,
    ))
}

/// Like [`get`], but swallows any error and returns `None` instead of
/// propagating `InvalidType`/`IeNotFound` — convenient for optional fields.
pub fn get_optional<T: ScalarIe>(ie: &Ie) -> Option<T> {
    get::<T>(ie).ok()
}

/// Builds a bit predicate accessor (e.g. `has_TCI`) out of a `ScalarIe`
/// whose payload carries flag bits: decodes `T` via [`get`], applies
/// `bit`, and swallows any decode error to `false`.
pub fn has_bit<T: ScalarIe>(ie: &Ie, bit: impl FnOnce(&T) -> bool) -> bool {
    get::<T>(ie).map(|v| bit(&v)).unwrap_or(false)
}

impl ScalarIe for crate::ie::data_status::DataStatus {
    const IE_TYPE: IeType = IeType::DataStatus;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload)
    }
}

impl ScalarIe for crate::ie::monitoring_time::MonitoringTime {
    const IE_TYPE: IeType = IeType::MonitoringTime;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload)
    }
}

impl ScalarIe for crate::ie::inactivity_detection_time::InactivityDetectionTime {
    const IE_TYPE: IeType = IeType::InactivityDetectionTime;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload)
    }
}

impl ScalarIe for crate::ie::volume_threshold::VolumeThreshold {
    const IE_TYPE: IeType = IeType::VolumeThreshold;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload).map_err(PfcpError::from)
    }
}

impl ScalarIe for crate::ie::time_threshold::TimeThreshold {
    const IE_TYPE: IeType = IeType::TimeThreshold;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload).map_err(PfcpError::from)
    }
}

impl ScalarIe for crate::ie::f_teid::Fteid {
    const IE_TYPE: IeType = IeType::Fteid;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload)
    }
}

impl ScalarIe for crate::ie::cause::Cause {
    const IE_TYPE: IeType = IeType::Cause;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload).map_err(PfcpError::from)
    }
}

impl ScalarIe for crate::ie::node_id::NodeId {
    const IE_TYPE: IeType = IeType::NodeId;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload)
    }
}

impl ScalarIe for crate::ie::recovery_time_stamp::RecoveryTimeStamp {
    const IE_TYPE: IeType = IeType::RecoveryTimeStamp;

    fn decode(payload: &[u8]) -> Result<Self, PfcpError> {
        Self::unmarshal(payload)
    }
}
