use serde::{Deserialize, Serialize};

/// Configuration record type codes.
///
/// These values must match `HMTL_OUTPUT_*` in the module firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum RecordType {
    Header = 0x0,
    Value = 0x1,
    Rgb = 0x2,
    Program = 0x3,
    Pixels = 0x4,
    Mpr121 = 0x5,
    Rs485 = 0x6,
}

impl RecordType {
    pub const ALL: [RecordType; 7] = [
        RecordType::Header,
        RecordType::Value,
        RecordType::Rgb,
        RecordType::Program,
        RecordType::Pixels,
        RecordType::Mpr121,
        RecordType::Rs485,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Name used by the JSON `type` field
    pub fn name(self) -> &'static str {
        match self {
            RecordType::Header => "header",
            RecordType::Value => "value",
            RecordType::Rgb => "rgb",
            RecordType::Program => "program",
            RecordType::Pixels => "pixels",
            RecordType::Mpr121 => "mpr121",
            RecordType::Rs485 => "rs485",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_firmware() {
        let codes: Vec<(&str, u8)> = RecordType::ALL.iter().map(|t| (t.name(), t.code())).collect();
        assert_eq!(
            codes,
            vec![
                ("header", 0),
                ("value", 1),
                ("rgb", 2),
                ("program", 3),
                ("pixels", 4),
                ("mpr121", 5),
                ("rs485", 6),
            ]
        );
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(RecordType::from_code(7), None);
        assert_eq!(RecordType::from_name("strobe"), None);
        assert_eq!(RecordType::from_name("pixels"), Some(RecordType::Pixels));
    }
}
