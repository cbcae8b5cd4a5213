use serde::{Deserialize, Serialize};

use crate::protocol::RecordType;

/// One configurable output, tagged by the JSON `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputConfig {
    Value(ValueOutput),
    Rgb(RgbOutput),
    Program(ProgramOutput),
    Pixels(PixelsOutput),
    Mpr121(Mpr121Output),
    Rs485(Rs485Output),
}

impl OutputConfig {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Value(_) => RecordType::Value,
            Self::Rgb(_) => RecordType::Rgb,
            Self::Program(_) => RecordType::Program,
            Self::Pixels(_) => RecordType::Pixels,
            Self::Mpr121(_) => RecordType::Mpr121,
            Self::Rs485(_) => RecordType::Rs485,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueOutput {
    pub pin: u64,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbOutput {
    pub pins: Vec<u64>,
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgramOutput {
    #[serde(default)]
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelsOutput {
    pub clockpin: u64,
    pub datapin: u64,
    pub numpixels: u64,
    pub rgbtype: u64,
}

// mpr121 and rs485 are not field-checked, so everything defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mpr121Output {
    #[serde(default)]
    pub irqpin: u64,
    #[serde(default)]
    pub useinterrupt: bool,
    /// `[touch, release]` per sensor
    #[serde(default)]
    pub thresholds: Vec<[u64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rs485Output {
    #[serde(default)]
    pub recvpin: u64,
    #[serde(default)]
    pub xmitpin: u64,
    #[serde(default)]
    pub enablepin: u64,
}
