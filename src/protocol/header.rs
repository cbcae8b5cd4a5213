//! Header record
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0x00    1B    magic (0x5C)
//! 0x01    1B    protocol_version
//! 0x02    1B    hardware_version
//! 0x03    2B    address (little-endian)
//! 0x05    1B    reserved (0)
//! 0x06    1B    output_count
//! 0x07    1B    flags
//! ```

use super::{encode_frame_start, fit_u16, fit_u8, RecordType, HEADER_MAGIC};
use crate::config::HmtlConfig;
use crate::error::{HmtlError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRecord {
    pub protocol_version: u8,
    pub hardware_version: u8,
    pub address: u16,
    pub output_count: u8,
    pub flags: u8,
}

impl HeaderRecord {
    /// Payload size in bytes
    pub const SIZE: usize = 8;

    /// Build the header for a configuration. `output_count` always comes from
    /// the outputs list.
    pub fn from_config(config: &HmtlConfig) -> Result<Self> {
        let header = &config.header;
        Ok(Self {
            protocol_version: fit_u8("protocol_version", header.protocol_version)?,
            hardware_version: fit_u8("hardware_version", header.hardware_version)?,
            address: fit_u16("address", header.address)?,
            output_count: fit_u8("output_count", config.outputs.len() as u64)?,
            flags: fit_u8("flags", header.flags)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        let address = self.address.to_le_bytes();

        buf[0] = HEADER_MAGIC;
        buf[1] = self.protocol_version;
        buf[2] = self.hardware_version;
        buf[3] = address[0];
        buf[4] = address[1];
        buf[5] = 0;
        buf[6] = self.output_count;
        buf[7] = self.flags;

        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(HmtlError::Decode(format!(
                "header payload is {} bytes, expected {}",
                bytes.len(),
                Self::SIZE
            )));
        }
        if bytes[0] != HEADER_MAGIC {
            return Err(HmtlError::Decode(format!("bad header magic 0x{:02X}", bytes[0])));
        }
        if bytes[5] != 0 {
            return Err(HmtlError::Decode(format!(
                "reserved header byte is 0x{:02X}, expected 0",
                bytes[5]
            )));
        }

        Ok(Self {
            protocol_version: bytes[1],
            hardware_version: bytes[2],
            address: u16::from_le_bytes([bytes[3], bytes[4]]),
            output_count: bytes[6],
            flags: bytes[7],
        })
    }
}

/// Header frame for a full configuration transfer
pub fn encode_header(config: &HmtlConfig) -> Result<Vec<u8>> {
    let record = HeaderRecord::from_config(config)?;

    let mut bytes = encode_frame_start(RecordType::Header).to_vec();
    bytes.extend_from_slice(&record.to_bytes());
    Ok(bytes)
}

/// Set-address record: a header frame carrying only the magic and the new
/// address, which the firmware distinguishes from a full header by length.
pub fn encode_address(address: u64) -> Result<Vec<u8>> {
    let address = fit_u16("address", address)?;

    let mut bytes = encode_frame_start(RecordType::Header).to_vec();
    bytes.push(HEADER_MAGIC);
    bytes.extend_from_slice(&address.to_le_bytes());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigHeader, OutputConfig, ValueOutput};

    fn config(address: u64, outputs: usize) -> HmtlConfig {
        HmtlConfig {
            header: ConfigHeader {
                protocol_version: 1,
                hardware_version: 3,
                address,
                flags: 0x80,
            },
            outputs: (0..outputs)
                .map(|pin| OutputConfig::Value(ValueOutput { pin: pin as u64, value: 0 }))
                .collect(),
        }
    }

    #[test]
    fn test_header_layout_is_little_endian() {
        let bytes = encode_header(&config(0x1234, 2)).unwrap();
        assert_eq!(bytes, vec![0xFE, 0x00, 0x5C, 0x01, 0x03, 0x34, 0x12, 0x00, 0x02, 0x80]);
    }

    #[test]
    fn test_header_decodes_to_same_fields() {
        let record = HeaderRecord::from_config(&config(513, 4)).unwrap();
        let decoded = HeaderRecord::from_bytes(&record.to_bytes()).unwrap();

        assert_eq!(decoded, record);
        assert_eq!(decoded.address, 513);
        assert_eq!(decoded.output_count, 4);
        assert_eq!(decoded.flags, 0x80);
    }

    #[test]
    fn test_address_out_of_range() {
        match encode_header(&config(70_000, 0)) {
            Err(HmtlError::EncodingRange { field, .. }) => assert_eq!(field, "address"),
            other => panic!("expected range error, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_outputs() {
        match encode_header(&config(1, 256)) {
            Err(HmtlError::EncodingRange { field, value, .. }) => {
                assert_eq!(field, "output_count");
                assert_eq!(value, 256);
            }
            other => panic!("expected range error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut bytes = HeaderRecord::from_config(&config(1, 0)).unwrap().to_bytes();
        bytes[0] = 0x00;
        assert!(HeaderRecord::from_bytes(&bytes).is_err());
        assert!(HeaderRecord::from_bytes(&bytes[..3]).is_err());
    }

    #[test]
    fn test_header_length_and_reserved_byte_checked() {
        let bytes = HeaderRecord::from_config(&config(1, 0)).unwrap().to_bytes();

        let mut long = bytes.to_vec();
        long.push(0);
        assert!(matches!(HeaderRecord::from_bytes(&long), Err(HmtlError::Decode(_))));

        let mut reserved = bytes;
        reserved[5] = 1;
        assert!(matches!(HeaderRecord::from_bytes(&reserved), Err(HmtlError::Decode(_))));
    }

    #[test]
    fn test_address_record() {
        assert_eq!(encode_address(0x0102).unwrap(), vec![0xFE, 0x00, 0x5C, 0x02, 0x01]);
        assert!(encode_address(0x1_0000).is_err());
    }
}
