use serde_json::Value;

use crate::{
    config::validation::{config_validator::ConfigValidator, error::ValidationError},
    log_error,
    protocol::RecordType,
};

impl ConfigValidator {
    /// Verify that a single output's configuration is valid
    pub fn validate_output(index: usize, output: &Value) -> Result<(), ValidationError> {
        let type_value = output.get("type").ok_or_else(|| {
            log_error!("No 'type' field in output {}: {}", index, output);
            ValidationError::missing_field(Some(index), "type")
        })?;

        let record_type = type_value
            .as_str()
            .and_then(RecordType::from_name)
            .filter(|t| *t != RecordType::Header)
            .ok_or_else(|| {
                log_error!("{} is not a valid HMTL output type", type_value);
                ValidationError::unknown_type(Some(index))
            })?;

        match record_type {
            RecordType::Value => {
                Self::check_required(index, output, "pin", None)?;
                Self::check_required(index, output, "value", None)?;
            }
            RecordType::Rgb => {
                Self::check_required(index, output, "pins", Some(3))?;
                Self::check_required(index, output, "values", Some(3))?;
            }
            RecordType::Pixels => {
                Self::check_required(index, output, "clockpin", None)?;
                Self::check_required(index, output, "datapin", None)?;
                Self::check_required(index, output, "numpixels", None)?;
                Self::check_required(index, output, "rgbtype", None)?;
            }
            // program, mpr121 and rs485 carry no required fields
            RecordType::Program => Self::check_optional(index, output, &["values"])?,
            RecordType::Mpr121 => Self::check_optional(index, output, &["irqpin"])?,
            RecordType::Rs485 => {
                Self::check_optional(index, output, &["recvpin", "xmitpin", "enablepin"])?;
            }
            RecordType::Header => {}
        }

        Ok(())
    }
}
