//! HMTL configuration wire protocol
//!
//! Configuration records travel host → device as binary frames:
//!
//! ```text
//! [0xFE][type:1][payload...]['\n']
//! ```
//!
//! Control commands are bare text tokens terminated by `'\n'`. The device
//! answers every command or record with a single line: `ok` or `fail`.
//! All multi-byte fields are little-endian.

mod command;
mod frame;
mod header;
mod output;
mod record_type;

pub use command::Command;
pub use frame::{decode_frame, encode_frame_start};
pub use header::{encode_address, encode_header, HeaderRecord};
pub use output::{encode_output, OutputRecord};
pub use record_type::RecordType;

/// First byte of every configuration frame
pub const CONFIG_START_BYTE: u8 = 0xFE;

/// Magic byte leading the header payload
pub const HEADER_MAGIC: u8 = 0x5C;

/// Appended to every command and record sent to the device
pub const TERMINATOR: u8 = b'\n';

/// Device → host tokens
pub const READY_TOKEN: &str = "ready";
pub const ACK_TOKEN: &str = "ok";
pub const FAIL_TOKEN: &str = "fail";

/// Number of parameter bytes carried by a program output
pub const MAX_PROGRAM_VALUES: usize = 4;

/// Number of sensor thresholds carried by an MPR121 output
pub const MAX_MPR121_PINS: usize = 12;

use crate::error::{HmtlError, Result};

pub(crate) fn fit_u8(field: &str, value: u64) -> Result<u8> {
    u8::try_from(value).map_err(|_| HmtlError::encoding_range(field, value, u8::MAX as u64))
}

pub(crate) fn fit_u16(field: &str, value: u64) -> Result<u16> {
    u16::try_from(value).map_err(|_| HmtlError::encoding_range(field, value, u16::MAX as u64))
}

pub(crate) fn fit_bounded(field: &str, value: u64, max: u64) -> Result<u8> {
    if value > max {
        return Err(HmtlError::encoding_range(field, value, max));
    }
    fit_u8(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_u8_names_field() {
        assert_eq!(fit_u8("pin", 255).unwrap(), 255);

        match fit_u8("pin", 256) {
            Err(HmtlError::EncodingRange { field, value, max }) => {
                assert_eq!(field, "pin");
                assert_eq!(value, 256);
                assert_eq!(max, 255);
            }
            other => panic!("expected range error, got {:?}", other),
        }
    }

    #[test]
    fn test_fit_bounded_nibble() {
        assert_eq!(fit_bounded("thresholds[0].touch", 15, 0x0F).unwrap(), 15);
        assert!(fit_bounded("thresholds[0].touch", 16, 0x0F).is_err());
    }
}
