//! URI Information Element.
//!
//! Per 3GPP TS 29.244, contains a URI as a variable-length string.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    pub value: String,
}

impl Uri {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.value.as_bytes().to_vec()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        let value = String::from_utf8(data.to_vec())
            .map_err(|e| PfcpError::encoding_error("URI", IeType::Uri, e.utf8_error()))?;
        Ok(Self { value })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::Uri, self.marshal())
    }
}
