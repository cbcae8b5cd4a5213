use serde_json::Value;

use crate::config::validation::{config_validator::ConfigValidator, error::ValidationError};
use crate::log_error;

impl ConfigValidator {
    /// Require a number field to hold an unsigned integer; arrays must hold only unsigned integers.
    pub(super) fn check_unsigned(
        output_index: Option<usize>,
        field: &str,
        value: &Value,
    ) -> Result<(), ValidationError> {
        let unsigned = match value {
            Value::Array(items) => items.iter().all(|item| item.as_u64().is_some()),
            other => other.as_u64().is_some(),
        };

        if !unsigned {
            log_error!("'{}' should be an unsigned integer, got {}", field, value);
            return Err(ValidationError::wrong_type(output_index, field));
        }
        Ok(())
    }
}
