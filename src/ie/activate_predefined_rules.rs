// src/ie/activate_predefined_rules.rs

//! Activate Predefined Rules Information Element.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatePredefinedRules {
    pub rule_name: String,
}

impl ActivatePredefinedRules {
    pub fn new(rule_name: &str) -> Self {
        ActivatePredefinedRules {
            rule_name: rule_name.to_string(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.rule_name.as_bytes().to_vec()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        let rule_name = String::from_utf8(data.to_vec()).map_err(|e| {
            PfcpError::encoding_error(
                "Activate Predefined Rules",
                IeType::ActivatePredefinedRules,
                e.utf8_error(),
            )
        })?;
        Ok(ActivatePredefinedRules { rule_name })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::ActivatePredefinedRules, self.marshal())
    }
}
