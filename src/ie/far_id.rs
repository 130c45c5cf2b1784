// src/ie/far_id.rs

//! FAR ID Information Element.

use crate::ie::{Ie, IeType};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarId {
    pub value: u32,
}

impl FarId {
    pub fn new(value: u32) -> Self {
        FarId { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Unmarshals a byte slice into a FAR ID.
    ///
    /// Per 3GPP TS 29.244, FAR ID requires exactly 4 bytes (Rule ID).
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.len() < 4 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("FAR ID requires 4 bytes, got {}", data.len()),
            ));
        }
        Ok(FarId {
            value: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::FarId, self.marshal().to_vec())
    }
}
