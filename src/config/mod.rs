mod load_from_path;
mod output_config;
mod validation;

use serde::{Deserialize, Serialize};

pub use output_config::{
    Mpr121Output, OutputConfig, PixelsOutput, ProgramOutput, RgbOutput, Rs485Output, ValueOutput,
};
pub use validation::{ConfigValidator, ValidationError, ValidationReason};

/// A module configuration as read from JSON
///
/// *Note: there is no `output_count` field; the header record derives it from `outputs`*
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HmtlConfig {
    pub header: ConfigHeader,
    pub outputs: Vec<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigHeader {
    pub protocol_version: u64,
    pub hardware_version: u64,
    pub address: u64,
    #[serde(default)]
    pub flags: u64,
}
