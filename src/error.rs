//! PFCP Error Handling
//!
//! This module provides centralized error message templates for consistent error reporting
//! across the rs-pfcp library.
//!
//! ## Version Strategy
//!
//! - **v0.2.4 (Current)**: Error message constants (this module)
//!   - Centralizes error strings for consistency
//!   - Non-breaking change
//!   - All functions continue to return `std::io::Error`
//!
//! - **v0.3.0 (Future)**: Custom `PfcpError` enum
//!   - Structured error type with variants
//!   - Breaking change (changes error types in signatures)
//!   - Will leverage these message templates in Display implementations
//!   - See `docs/analysis/ongoing/custom-error-type.md` for design
//!
//! ## Usage
//!
//! ```rust
//! use std::io;
//! use rs_pfcp::error::messages;
//!
//! # fn example() -> Result<(), io::Error> {
//! // Before: Hard-coded error strings
//! // return Err(io::Error::new(io::ErrorKind::InvalidData, "Missing PDR ID"));
//!
//! // After: Centralized constants
//! let ie_name = "PDR ID";
//! return Err(io::Error::new(
//!     io::ErrorKind::InvalidData,
//!     format!("{}", messages::missing_mandatory_ie_short(ie_name))
//! ));
//! # }
//! ```

/// Error message templates for consistent error reporting
pub mod messages {
    // ========================================================================
    // Missing IE Errors
    // ========================================================================

    /// Format: "Missing mandatory {ie_name} IE"
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::missing_mandatory_ie_short("PDR ID");
    /// assert_eq!(error_msg, "Missing mandatory PDR ID IE");
    /// ```
    pub fn missing_mandatory_ie_short(ie_name: &str) -> String {
        format!("Missing mandatory {} IE", ie_name)
    }

    /// Format: "Missing {ie_name} IE"
    ///
    /// Used for both mandatory and conditional IEs where context makes it clear.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::missing_ie("Node ID");
    /// assert_eq!(error_msg, "Missing Node ID IE");
    /// ```
    pub fn missing_ie(ie_name: &str) -> String {
        format!("Missing {} IE", ie_name)
    }

    /// Format: "{ie_name} IE not found"
    ///
    /// Alternative phrasing for IE lookup failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::ie_not_found("F-SEID");
    /// assert_eq!(error_msg, "F-SEID IE not found");
    /// ```
    pub fn ie_not_found(ie_name: &str) -> String {
        format!("{} IE not found", ie_name)
    }

    /// Format: "{ie_name} is required"
    ///
    /// Used in builder validation and field checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::ie_required("Cause");
    /// assert_eq!(error_msg, "Cause is required");
    /// ```
    pub fn ie_required(ie_name: &str) -> String {
        format!("{} is required", ie_name)
    }

    /// Format: "{ie_name} IE is mandatory"
    ///
    /// Explicit mandatory IE error for 3GPP compliance messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::ie_is_mandatory("Cause");
    /// assert_eq!(error_msg, "Cause IE is mandatory");
    /// ```
    pub fn ie_is_mandatory(ie_name: &str) -> String {
        format!("{} IE is mandatory", ie_name)
    }

    // ========================================================================
    // Length Errors
    // ========================================================================

    /// Format: "{ie_name} requires at least {min_bytes} byte(s)"
    ///
    /// Used when IE payload is too short.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::requires_at_least_bytes("PDR ID", 2);
    /// assert_eq!(error_msg, "PDR ID requires at least 2 bytes");
    /// ```
    pub fn requires_at_least_bytes(ie_name: &str, min_bytes: usize) -> String {
        let byte_word = if min_bytes == 1 { "byte" } else { "bytes" };
        format!("{} requires at least {} {}", ie_name, min_bytes, byte_word)
    }

    /// Format: "{ie_name} payload too short"
    ///
    /// Concise version for payload length errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::payload_too_short("Reporting Triggers");
    /// assert_eq!(error_msg, "Reporting Triggers payload too short");
    /// ```
    pub fn payload_too_short(ie_name: &str) -> String {
        format!("{} payload too short", ie_name)
    }

    /// Format: "{ie_name} payload too short: expected at least {min_bytes} byte(s)"
    ///
    /// Detailed version with expected length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::payload_too_short_expected("Report Type", 1);
    /// assert_eq!(error_msg, "Report Type payload too short: expected at least 1 byte");
    /// ```
    pub fn payload_too_short_expected(ie_name: &str, min_bytes: usize) -> String {
        let byte_word = if min_bytes == 1 { "byte" } else { "bytes" };
        format!(
            "{} payload too short: expected at least {} {}",
            ie_name, min_bytes, byte_word
        )
    }

    /// Format: "{context} too short"
    ///
    /// Generic "too short" error for headers, payloads, or buffers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::too_short("Header");
    /// assert_eq!(error_msg, "Header too short");
    /// ```
    pub fn too_short(context: &str) -> String {
        format!("{} too short", context)
    }

    /// Format: "Invalid {ie_name} length: expected at least {expected} bytes, got {actual}"
    ///
    /// Precise length mismatch with both expected and actual values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_length("F-TEID", 9, 5);
    /// assert_eq!(error_msg, "Invalid F-TEID length: expected at least 9 bytes, got 5");
    /// ```
    pub fn invalid_length(ie_name: &str, expected: usize, actual: usize) -> String {
        format!(
            "Invalid {} length: expected at least {} bytes, got {}",
            ie_name, expected, actual
        )
    }

    // ========================================================================
    // Invalid Value Errors
    // ========================================================================

    /// Format: "Invalid {field_name} value"
    ///
    /// Generic invalid value error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_value("DSCP");
    /// assert_eq!(error_msg, "Invalid DSCP value");
    /// ```
    pub fn invalid_value(field_name: &str) -> String {
        format!("Invalid {} value", field_name)
    }

    /// Format: "Invalid {field_name} value: {reason}"
    ///
    /// Invalid value with explanation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_value_reason("gate status", "must be 0-3");
    /// assert_eq!(error_msg, "Invalid gate status value: must be 0-3");
    /// ```
    pub fn invalid_value_reason(field_name: &str, reason: &str) -> String {
        format!("Invalid {} value: {}", field_name, reason)
    }

    // ========================================================================
    // Builder Errors
    // ========================================================================

    /// Format: "{field_name} is required"
    ///
    /// Builder validation: missing required field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::builder_field_required("pdr_id");
    /// assert_eq!(error_msg, "pdr_id is required");
    /// ```
    pub fn builder_field_required(field_name: &str) -> String {
        format!("{} is required", field_name)
    }

    /// Format: "Builder {builder_type} is missing required field '{field_name}'"
    ///
    /// Detailed builder error with context.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::builder_missing_field("CreatePdrBuilder", "pdr_id");
    /// assert_eq!(
    ///     error_msg,
    ///     "Builder CreatePdrBuilder is missing required field 'pdr_id'"
    /// );
    /// ```
    pub fn builder_missing_field(builder_type: &str, field_name: &str) -> String {
        format!(
            "Builder {} is missing required field '{}'",
            builder_type, field_name
        )
    }

    // ========================================================================
    // Security / Validation Errors
    // ========================================================================

    /// Format: "Zero-length IE not allowed for {ie_name} (IE type: {ie_type}) per 3GPP TS 29.244 R18"
    ///
    /// Security validation: zero-length IE protection.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::zero_length_ie_not_allowed("F-TEID", 21);
    /// assert_eq!(
    ///     error_msg,
    ///     "Zero-length IE not allowed for F-TEID (IE type: 21) per 3GPP TS 29.244 R18"
    /// );
    /// ```
    pub fn zero_length_ie_not_allowed(ie_name: &str, ie_type: u16) -> String {
        format!(
            "Zero-length IE not allowed for {} (IE type: {}) per 3GPP TS 29.244 R18",
            ie_name, ie_type
        )
    }

    // ========================================================================
    // UTF-8 Encoding Errors
    // ========================================================================

    /// Format: "Invalid UTF-8 in {ie_name}"
    ///
    /// UTF-8 decoding failure in IE payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_utf8("Application ID");
    /// assert_eq!(error_msg, "Invalid UTF-8 in Application ID");
    /// ```
    pub fn invalid_utf8(ie_name: &str) -> String {
        format!("Invalid UTF-8 in {}", ie_name)
    }
}

use crate::ie::IeType;
use crate::message::MsgType;
use std::fmt;
use std::str::Utf8Error;

/// Unified error type for PFCP encoding, decoding, and validation failures.
///
/// Replaces the ad-hoc `std::io::Error` values the codec used to return. Every
/// variant carries enough context (IE type, message type, field name) for a
/// caller to react programmatically instead of matching on a message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PfcpError {
    /// A buffer ended before the structure being decoded could be read in full.
    TooShort {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// An IE, message, or header field carried a type tag this decoder does not
    /// accept in the position it appeared.
    InvalidType { context: String, value: u16 },

    /// A lookup for a specific IE inside a message or grouped IE came up empty.
    IeNotFound { ie_type: IeType, context: String },

    /// An FQDN payload did not parse as a well-formed sequence of DNS labels.
    MalformedFqdn { ie_name: String, reason: String },

    /// An IE's payload length did not match what its type requires.
    InvalidLength {
        ie_name: String,
        ie_type: IeType,
        expected: usize,
        actual: usize,
    },

    /// The PFCP header declared a protocol version this library does not speak.
    UnsupportedVersion { version: u8 },

    /// A field decoded successfully but holds a value that is out of range or
    /// otherwise semantically invalid.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// A mandatory IE was absent when a message or grouped IE was decoded or
    /// when a builder tried to assemble one.
    MissingMandatoryIe {
        ie_type: IeType,
        message_type: Option<MsgType>,
        parent_ie: Option<IeType>,
    },

    /// A builder's `build()` was called without a required field having been set.
    BuilderMissingField {
        builder_type: String,
        field_name: String,
    },

    /// A builder enforced a cross-field invariant that the supplied values violated.
    ValidationError {
        builder: String,
        field: String,
        reason: String,
    },

    /// A byte sequence could not be encoded into or decoded from its target
    /// string representation (e.g. non-UTF-8 text in a textual IE).
    EncodingError {
        ie_name: String,
        ie_type: IeType,
        reason: String,
    },

    /// A message-level structural rule was violated (e.g. a duplicate IE that
    /// may appear at most once).
    InvalidMessage {
        message_type: MsgType,
        reason: String,
    },

    /// A message failed to parse for a reason not captured by a more specific
    /// variant above.
    MessageParseError {
        message_type: Option<MsgType>,
        reason: String,
    },

    /// The fixed 8- or 16-byte PFCP header was malformed.
    InvalidHeader {
        reason: String,
        position: Option<usize>,
    },
}

impl PfcpError {
    pub fn too_short(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        PfcpError::TooShort {
            context: context.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_type(context: impl Into<String>, value: u16) -> Self {
        PfcpError::InvalidType {
            context: context.into(),
            value,
        }
    }

    pub fn ie_not_found(ie_type: IeType, context: impl Into<String>) -> Self {
        PfcpError::IeNotFound {
            ie_type,
            context: context.into(),
        }
    }

    pub fn malformed_fqdn(ie_name: impl Into<String>, reason: impl Into<String>) -> Self {
        PfcpError::MalformedFqdn {
            ie_name: ie_name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_length(
        ie_name: impl Into<String>,
        ie_type: IeType,
        expected: usize,
        actual: usize,
    ) -> Self {
        PfcpError::InvalidLength {
            ie_name: ie_name.into(),
            ie_type,
            expected,
            actual,
        }
    }

    pub fn unsupported_version(version: u8) -> Self {
        PfcpError::UnsupportedVersion { version }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        PfcpError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn missing_mandatory_ie(
        ie_type: IeType,
        message_type: Option<MsgType>,
        parent_ie: Option<IeType>,
    ) -> Self {
        PfcpError::MissingMandatoryIe {
            ie_type,
            message_type,
            parent_ie,
        }
    }

    /// Convenience constructor for a mandatory child IE missing from a grouped
    /// IE's payload, e.g. a Create PDR with no PDR ID inside it.
    pub fn missing_ie_in_grouped(ie_type: IeType, parent_ie: IeType) -> Self {
        PfcpError::MissingMandatoryIe {
            ie_type,
            message_type: None,
            parent_ie: Some(parent_ie),
        }
    }

    pub fn builder_missing_field(
        builder_type: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        PfcpError::BuilderMissingField {
            builder_type: builder_type.into(),
            field_name: field_name.into(),
        }
    }

    pub fn validation_error(
        builder: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PfcpError::ValidationError {
            builder: builder.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn encoding_error(
        ie_name: impl Into<String>,
        ie_type: IeType,
        source: Utf8Error,
    ) -> Self {
        PfcpError::EncodingError {
            ie_name: ie_name.into(),
            ie_type,
            reason: source.to_string(),
        }
    }

    pub fn invalid_message(message_type: MsgType, reason: impl Into<String>) -> Self {
        PfcpError::InvalidMessage {
            message_type,
            reason: reason.into(),
        }
    }

    pub fn message_parse_error(message_type: Option<MsgType>, reason: impl Into<String>) -> Self {
        PfcpError::MessageParseError {
            message_type,
            reason: reason.into(),
        }
    }

    pub fn invalid_header(reason: impl Into<String>, position: Option<usize>) -> Self {
        PfcpError::InvalidHeader {
            reason: reason.into(),
            position,
        }
    }
}

impl fmt::Display for PfcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PfcpError::TooShort {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected at least {} bytes, got {}",
                messages::too_short(context),
                expected,
                actual
            ),
            PfcpError::InvalidType { context, value } => {
                write!(f, "Invalid type {} in {}", value, context)
            }
            PfcpError::IeNotFound { ie_type, context } => {
                write!(
                    f,
                    "{} ({:?} in {})",
                    messages::ie_not_found(&format!("{:?}", ie_type)),
                    ie_type,
                    context
                )
            }
            PfcpError::MalformedFqdn { ie_name, reason } => {
                write!(f, "Malformed FQDN in {}: {}", ie_name, reason)
            }
            PfcpError::InvalidLength {
                ie_name,
                expected,
                actual,
                ..
            } => write!(f, "{}", messages::invalid_length(ie_name, *expected, *actual)),
            PfcpError::UnsupportedVersion { version } => {
                write!(f, "Unsupported PFCP version: {}", version)
            }
            PfcpError::InvalidValue {
                field,
                value,
                reason,
            } => write!(
                f,
                "{} (value: {})",
                messages::invalid_value_reason(field, reason),
                value
            ),
            PfcpError::MissingMandatoryIe {
                ie_type,
                message_type,
                parent_ie,
            } => {
                write!(
                    f,
                    "{}",
                    messages::missing_mandatory_ie_short(&format!("{:?}", ie_type))
                )?;
                if let Some(parent) = parent_ie {
                    write!(f, " (inside {:?})", parent)?;
                }
                if let Some(msg) = message_type {
                    write!(f, " (in {:?})", msg)?;
                }
                Ok(())
            }
            PfcpError::BuilderMissingField {
                builder_type,
                field_name,
            } => write!(
                f,
                "{}",
                messages::builder_missing_field(builder_type, field_name)
            ),
            PfcpError::ValidationError {
                builder,
                field,
                reason,
            } => write!(f, "{} validation failed for {}: {}", builder, field, reason),
            PfcpError::EncodingError {
                ie_name,
                reason,
                ..
            } => write!(f, "{}: {}", messages::invalid_utf8(ie_name), reason),
            PfcpError::InvalidMessage {
                message_type,
                reason,
            } => write!(f, "Invalid {:?} message: {}", message_type, reason),
            PfcpError::MessageParseError {
                message_type,
                reason,
            } => match message_type {
                Some(mt) => write!(f, "Failed to parse {:?}: {}", mt, reason),
                None => write!(f, "Failed to parse message: {}", reason),
            },
            PfcpError::InvalidHeader { reason, position } => match position {
                Some(pos) => write!(f, "Invalid header at byte {}: {}", pos, reason),
                None => write!(f, "Invalid header: {}", reason),
            },
        }
    }
}

impl std::error::Error for PfcpError {}

impl From<PfcpError> for std::io::Error {
    fn from(err: PfcpError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string())
    }
}

/// Lets call sites still returning `io::Error` propagate through `?` into
/// functions that have migrated to `PfcpError`, without needing every
/// caller's error construction rewritten in lockstep.
impl From<std::io::Error> for PfcpError {
    fn from(err: std::io::Error) -> Self {
        PfcpError::MessageParseError {
            message_type: None,
            reason: err.to_string(),
        }
    }
}
