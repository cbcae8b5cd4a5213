use serde_json::Value;

use crate::config::validation::{config_validator::ConfigValidator, error::ValidationError};
use crate::log_error;

impl ConfigValidator {
    /// Require `field` in an output as an unsigned integer, or when `length` is
    /// given, as an array of exactly that many unsigned integers.
    pub(super) fn check_required(
        index: usize,
        output: &Value,
        field: &str,
        length: Option<usize>,
    ) -> Result<(), ValidationError> {
        let type_name = output.get("type").and_then(|v| v.as_str()).unwrap_or("?");

        let value = match output.get(field) {
            Some(value) => value,
            None => {
                log_error!("'{}' is required in '{}' config (output {})", field, type_name, index);
                return Err(ValidationError::missing_field(Some(index), field));
            }
        };

        if let Some(length) = length {
            let actual = value.as_array().map(|a| a.len());
            if actual != Some(length) {
                log_error!(
                    "'{}' field should have length {} in '{}' config (output {})",
                    field,
                    length,
                    type_name,
                    index
                );
                return Err(ValidationError::wrong_length(Some(index), field));
            }
        }

        Self::check_unsigned(Some(index), field, value)
    }
}
