use serde_json::Value;

use crate::config::validation::{config_validator::ConfigValidator, error::ValidationError};

impl ConfigValidator {
    /// Type-check whichever of `fields` the output sets
    pub(super) fn check_optional(
        index: usize,
        output: &Value,
        fields: &[&str],
    ) -> Result<(), ValidationError> {
        for field in fields {
            if let Some(value) = output.get(*field) {
                Self::check_unsigned(Some(index), field, value)?;
            }
        }
        Ok(())
    }
}
