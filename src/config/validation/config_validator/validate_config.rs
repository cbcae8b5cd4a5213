use serde_json::Value;

use crate::{
    config::validation::{config_validator::ConfigValidator, error::ValidationError},
    log_debug, log_error,
};

const REQUIRED_HEADER_FIELDS: [&str; 3] = ["protocol_version", "hardware_version", "address"];

impl ConfigValidator {
    /// Verify that a configuration document is valid.
    ///
    /// A header without `flags` gets `flags: 0` inserted; nothing else is modified.
    pub fn validate_config(data: &mut Value) -> Result<(), ValidationError> {
        log_debug!("Validating configuration data");

        let header = match data.get_mut("header").and_then(|h| h.as_object_mut()) {
            Some(header) => header,
            None => {
                log_error!("Configuration does not contain 'header'");
                return Err(ValidationError::missing_field(None, "header"));
            }
        };

        for field in REQUIRED_HEADER_FIELDS {
            match header.get(field) {
                Some(value) => Self::check_unsigned(None, field, value)?,
                None => {
                    log_error!("No {} in header", field);
                    return Err(ValidationError::missing_field(None, field));
                }
            }
        }

        match header.get("flags") {
            Some(flags) => Self::check_unsigned(None, "flags", flags)?,
            None => {
                header.insert("flags".to_string(), Value::from(0));
            }
        }

        let outputs = match data.get("outputs").and_then(|o| o.as_array()) {
            Some(outputs) => outputs,
            None => {
                log_error!("Configuration does not contain 'outputs'");
                return Err(ValidationError::missing_field(None, "outputs"));
            }
        };

        for (index, output) in outputs.iter().enumerate() {
            Self::validate_output(index, output)?;
        }

        Ok(())
    }
}
