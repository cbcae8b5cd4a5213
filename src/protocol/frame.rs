use super::{RecordType, CONFIG_START_BYTE};
use crate::error::{HmtlError, Result};

/// Two-byte prefix opening every configuration record
pub fn encode_frame_start(record_type: RecordType) -> [u8; 2] {
    [CONFIG_START_BYTE, record_type.code()]
}

/// Split a frame (without terminator) into its type and payload
pub fn decode_frame(bytes: &[u8]) -> Result<(RecordType, &[u8])> {
    match bytes {
        [CONFIG_START_BYTE, code, payload @ ..] => {
            let record_type = RecordType::from_code(*code)
                .ok_or_else(|| HmtlError::Decode(format!("unknown record type 0x{:02X}", code)))?;
            Ok((record_type, payload))
        }
        [first, _, ..] => Err(HmtlError::Decode(format!(
            "bad start marker 0x{:02X}, expected 0x{:02X}",
            first, CONFIG_START_BYTE
        ))),
        _ => Err(HmtlError::Decode(format!("frame too short ({} bytes)", bytes.len()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_start() {
        assert_eq!(encode_frame_start(RecordType::Header), [0xFE, 0x00]);
        assert_eq!(encode_frame_start(RecordType::Rs485), [0xFE, 0x06]);
    }

    #[test]
    fn test_decode_frame_splits_payload() {
        let (record_type, payload) = decode_frame(&[0xFE, 0x01, 0x00, 0x03, 0xFF]).unwrap();
        assert_eq!(record_type, RecordType::Value);
        assert_eq!(payload, &[0x00, 0x03, 0xFF]);
    }

    #[test]
    fn test_decode_frame_rejects_garbage() {
        assert!(decode_frame(&[0xFE]).is_err());
        assert!(decode_frame(&[0x00, 0x01, 0x02]).is_err());
        assert!(decode_frame(&[0xFE, 0x09]).is_err());
    }
}
