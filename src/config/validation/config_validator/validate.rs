use serde_json::Value;

use crate::{
    config::{validation::config_validator::ConfigValidator, HmtlConfig},
    error::Result,
    log_debug, log_error,
};

impl ConfigValidator {
    /// Validate a configuration document and convert it to its typed form.
    ///
    /// Number fields are type-checked during validation. The mpr121 `useinterrupt`
    /// and `thresholds` fields are only checked here, and a mismatch in them
    /// comes back as `HmtlError::JsonError`.
    pub fn load(mut data: Value) -> Result<HmtlConfig> {
        Self::validate_config(&mut data)?;

        log_debug!("Validated: {}", serde_json::to_string_pretty(&data).unwrap_or_default());

        let config: HmtlConfig = serde_json::from_value(data).map_err(|e| {
            log_error!("Failed to deserialize configuration: {}", e);
            e
        })?;

        Ok(config)
    }
}
