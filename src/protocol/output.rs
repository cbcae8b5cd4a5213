//! Output records
//!
//! Every output payload starts with the output's index in the configuration,
//! followed by the type-specific fields:
//!
//! ```text
//! value    index, pin, value
//! rgb      index, pin0, pin1, pin2, value0, value1, value2
//! program  index, v0, v1, v2, v3
//! pixels   index, clockpin, datapin, numpixels (u16 LE), rgbtype
//! mpr121   index, irqpin, useinterrupt, thresholds[12]
//! rs485    index, recvpin, xmitpin, enablepin
//! ```
//!
//! An MPR121 threshold byte packs `touch` in the low nibble and `release` in
//! the high nibble.

use super::{
    encode_frame_start, fit_bounded, fit_u16, fit_u8, RecordType, MAX_MPR121_PINS,
    MAX_PROGRAM_VALUES,
};
use crate::config::{OutputConfig, ValidationError};
use crate::error::{HmtlError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRecord {
    Value {
        index: u8,
        pin: u8,
        value: u8,
    },
    Rgb {
        index: u8,
        pins: [u8; 3],
        values: [u8; 3],
    },
    Program {
        index: u8,
        values: [u8; MAX_PROGRAM_VALUES],
    },
    Pixels {
        index: u8,
        clock_pin: u8,
        data_pin: u8,
        num_pixels: u16,
        rgb_type: u8,
    },
    Mpr121 {
        index: u8,
        irq_pin: u8,
        use_interrupt: bool,
        thresholds: [u8; MAX_MPR121_PINS],
    },
    Rs485 {
        index: u8,
        recv_pin: u8,
        xmit_pin: u8,
        enable_pin: u8,
    },
}

fn fit_triple(index: usize, field: &str, values: &[u64]) -> Result<[u8; 3]> {
    if values.len() != 3 {
        return Err(ValidationError::wrong_length(Some(index), field).into());
    }
    let mut out = [0u8; 3];
    for (i, v) in values.iter().enumerate() {
        out[i] = fit_u8(&format!("{}[{}]", field, i), *v)?;
    }
    Ok(out)
}

impl OutputRecord {
    pub fn from_config(index: usize, output: &OutputConfig) -> Result<Self> {
        let idx = fit_u8("output_count", index as u64)?;

        let record = match output {
            OutputConfig::Value(cfg) => OutputRecord::Value {
                index: idx,
                pin: fit_u8("pin", cfg.pin)?,
                value: fit_u8("value", cfg.value)?,
            },
            OutputConfig::Rgb(cfg) => OutputRecord::Rgb {
                index: idx,
                pins: fit_triple(index, "pins", &cfg.pins)?,
                values: fit_triple(index, "values", &cfg.values)?,
            },
            OutputConfig::Program(cfg) => {
                if cfg.values.len() > MAX_PROGRAM_VALUES {
                    return Err(HmtlError::encoding_range(
                        "values",
                        cfg.values.len() as u64,
                        MAX_PROGRAM_VALUES as u64,
                    ));
                }
                let mut values = [0u8; MAX_PROGRAM_VALUES];
                for (i, v) in cfg.values.iter().enumerate() {
                    values[i] = fit_u8(&format!("values[{}]", i), *v)?;
                }
                OutputRecord::Program { index: idx, values }
            }
            OutputConfig::Pixels(cfg) => OutputRecord::Pixels {
                index: idx,
                clock_pin: fit_u8("clockpin", cfg.clockpin)?,
                data_pin: fit_u8("datapin", cfg.datapin)?,
                num_pixels: fit_u16("numpixels", cfg.numpixels)?,
                rgb_type: fit_u8("rgbtype", cfg.rgbtype)?,
            },
            OutputConfig::Mpr121(cfg) => {
                if cfg.thresholds.len() > MAX_MPR121_PINS {
                    return Err(HmtlError::encoding_range(
                        "thresholds",
                        cfg.thresholds.len() as u64,
                        MAX_MPR121_PINS as u64,
                    ));
                }
                let mut thresholds = [0u8; MAX_MPR121_PINS];
                for (i, [touch, release]) in cfg.thresholds.iter().enumerate() {
                    let touch = fit_bounded(&format!("thresholds[{}].touch", i), *touch, 0x0F)?;
                    let release =
                        fit_bounded(&format!("thresholds[{}].release", i), *release, 0x0F)?;
                    thresholds[i] = touch | (release << 4);
                }
                OutputRecord::Mpr121 {
                    index: idx,
                    irq_pin: fit_u8("irqpin", cfg.irqpin)?,
                    use_interrupt: cfg.useinterrupt,
                    thresholds,
                }
            }
            OutputConfig::Rs485(cfg) => OutputRecord::Rs485 {
                index: idx,
                recv_pin: fit_u8("recvpin", cfg.recvpin)?,
                xmit_pin: fit_u8("xmitpin", cfg.xmitpin)?,
                enable_pin: fit_u8("enablepin", cfg.enablepin)?,
            },
        };

        Ok(record)
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            OutputRecord::Value { .. } => RecordType::Value,
            OutputRecord::Rgb { .. } => RecordType::Rgb,
            OutputRecord::Program { .. } => RecordType::Program,
            OutputRecord::Pixels { .. } => RecordType::Pixels,
            OutputRecord::Mpr121 { .. } => RecordType::Mpr121,
            OutputRecord::Rs485 { .. } => RecordType::Rs485,
        }
    }

    pub fn payload(&self) -> Vec<u8> {
        match self {
            OutputRecord::Value { index, pin, value } => vec![*index, *pin, *value],
            OutputRecord::Rgb { index, pins, values } => {
                let mut buf = vec![*index];
                buf.extend_from_slice(pins);
                buf.extend_from_slice(values);
                buf
            }
            OutputRecord::Program { index, values } => {
                let mut buf = vec![*index];
                buf.extend_from_slice(values);
                buf
            }
            OutputRecord::Pixels {
                index,
                clock_pin,
                data_pin,
                num_pixels,
                rgb_type,
            } => {
                let n = num_pixels.to_le_bytes();
                vec![*index, *clock_pin, *data_pin, n[0], n[1], *rgb_type]
            }
            OutputRecord::Mpr121 {
                index,
                irq_pin,
                use_interrupt,
                thresholds,
            } => {
                let mut buf = vec![*index, *irq_pin, *use_interrupt as u8];
                buf.extend_from_slice(thresholds);
                buf
            }
            OutputRecord::Rs485 {
                index,
                recv_pin,
                xmit_pin,
                enable_pin,
            } => vec![*index, *recv_pin, *xmit_pin, *enable_pin],
        }
    }

    /// Complete frame: start marker, type code, payload
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = encode_frame_start(self.record_type()).to_vec();
        bytes.extend(self.payload());
        bytes
    }

    pub fn decode(record_type: RecordType, payload: &[u8]) -> Result<Self> {
        let expected = match record_type {
            RecordType::Header => {
                return Err(HmtlError::Decode("header is not an output record".to_string()))
            }
            RecordType::Value => 3,
            RecordType::Rgb => 7,
            RecordType::Program => 1 + MAX_PROGRAM_VALUES,
            RecordType::Pixels => 6,
            RecordType::Mpr121 => 3 + MAX_MPR121_PINS,
            RecordType::Rs485 => 4,
        };
        if payload.len() != expected {
            return Err(HmtlError::Decode(format!(
                "{} payload is {} bytes, expected {}",
                record_type,
                payload.len(),
                expected
            )));
        }

        let p = payload;
        let record = match record_type {
            RecordType::Value => OutputRecord::Value {
                index: p[0],
                pin: p[1],
                value: p[2],
            },
            RecordType::Rgb => OutputRecord::Rgb {
                index: p[0],
                pins: [p[1], p[2], p[3]],
                values: [p[4], p[5], p[6]],
            },
            RecordType::Program => {
                let mut values = [0u8; MAX_PROGRAM_VALUES];
                values.copy_from_slice(&p[1..]);
                OutputRecord::Program { index: p[0], values }
            }
            RecordType::Pixels => OutputRecord::Pixels {
                index: p[0],
                clock_pin: p[1],
                data_pin: p[2],
                num_pixels: u16::from_le_bytes([p[3], p[4]]),
                rgb_type: p[5],
            },
            RecordType::Mpr121 => {
                let mut thresholds = [0u8; MAX_MPR121_PINS];
                thresholds.copy_from_slice(&p[3..]);
                OutputRecord::Mpr121 {
                    index: p[0],
                    irq_pin: p[1],
                    use_interrupt: p[2] != 0,
                    thresholds,
                }
            }
            RecordType::Rs485 => OutputRecord::Rs485 {
                index: p[0],
                recv_pin: p[1],
                xmit_pin: p[2],
                enable_pin: p[3],
            },
            RecordType::Header => unreachable!("rejected above"),
        };

        Ok(record)
    }
}

/// Frame for the output at `index` in the configuration
pub fn encode_output(index: usize, output: &OutputConfig) -> Result<Vec<u8>> {
    Ok(OutputRecord::from_config(index, output)?.to_bytes())
}
