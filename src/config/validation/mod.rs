mod error;
mod config_validator;

pub use config_validator::ConfigValidator;
pub use error::{ValidationError, ValidationReason};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::error::HmtlError;
    use serde_json::json;

    fn base_config(outputs: serde_json::Value) -> serde_json::Value {
        json!({
            "header": {
                "protocol_version": 1,
                "hardware_version": 1,
                "address": 5
            },
            "outputs": outputs
        })
    }

    #[test]
    fn test_valid_config_with_all_types() {
        let mut data = base_config(json!([
            { "type": "value", "pin": 3, "value": 255 },
            { "type": "rgb", "pins": [9, 10, 11], "values": [0, 0, 0] },
            { "type": "pixels", "clockpin": 12, "datapin": 8, "numpixels": 45, "rgbtype": 0 },
            { "type": "program" },
            { "type": "mpr121", "irqpin": 2, "useinterrupt": true },
            { "type": "rs485" }
        ]));

        assert!(ConfigValidator::validate_config(&mut data).is_ok());
    }

    #[test]
    fn test_missing_flags_defaults_to_zero() {
        let mut data = base_config(json!([]));

        ConfigValidator::validate_config(&mut data).unwrap();
        assert_eq!(data["header"]["flags"], json!(0));
    }

    #[test]
    fn test_existing_flags_untouched() {
        let mut data = base_config(json!([]));
        data["header"]["flags"] = json!(3);

        ConfigValidator::validate_config(&mut data).unwrap();
        assert_eq!(data["header"]["flags"], json!(3));
    }

    #[test]
    fn test_missing_header() {
        let mut data = json!({ "outputs": [] });
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err, ValidationError::missing_field(None, "header"));
    }

    #[test]
    fn test_missing_header_address() {
        let mut data = json!({
            "header": { "protocol_version": 1, "hardware_version": 1 },
            "outputs": []
        });
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err.field, "address");
        assert_eq!(err.reason, ValidationReason::MissingField);
    }

    #[test]
    fn test_missing_outputs() {
        let mut data = json!({
            "header": { "protocol_version": 1, "hardware_version": 1, "address": 5 }
        });
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err, ValidationError::missing_field(None, "outputs"));
    }

    #[test]
    fn test_value_missing_pin() {
        let mut data = base_config(json!([{ "type": "value", "value": 255 }]));
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err, ValidationError::missing_field(Some(0), "pin"));
    }

    #[test]
    fn test_value_missing_value() {
        let mut data = base_config(json!([
            { "type": "value", "pin": 3, "value": 1 },
            { "type": "value", "pin": 4 }
        ]));
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err, ValidationError::missing_field(Some(1), "value"));
    }

    #[test]
    fn test_rgb_wrong_pin_count() {
        let mut data = base_config(json!([
            { "type": "rgb", "pins": [9, 10], "values": [0, 0, 0] }
        ]));
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err.output_index, Some(0));
        assert_eq!(err.field, "pins");
        assert_eq!(err.reason, ValidationReason::WrongLength);
    }

    #[test]
    fn test_rgb_values_not_an_array() {
        let mut data = base_config(json!([
            { "type": "rgb", "pins": [9, 10, 11], "values": 7 }
        ]));
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err, ValidationError::wrong_length(Some(0), "values"));
    }

    #[test]
    fn test_non_integer_numbers_rejected() {
        let mut quoted_pin = base_config(json!([{ "type": "value", "pin": "3", "value": 1 }]));
        let err = ConfigValidator::validate_config(&mut quoted_pin).unwrap_err();
        assert_eq!(err, ValidationError::wrong_type(Some(0), "pin"));

        let mut negative_rgb = base_config(json!([
            { "type": "rgb", "pins": [9, -1, 11], "values": [0, 0, 0] }
        ]));
        let err = ConfigValidator::validate_config(&mut negative_rgb).unwrap_err();
        assert_eq!(err, ValidationError::wrong_type(Some(0), "pins"));

        let mut bad_rs485 = base_config(json!([{ "type": "rs485", "recvpin": 2.5 }]));
        let err = ConfigValidator::validate_config(&mut bad_rs485).unwrap_err();
        assert_eq!(err, ValidationError::wrong_type(Some(0), "recvpin"));
    }

    #[test]
    fn test_null_header_numbers_rejected() {
        let mut null_address = base_config(json!([]));
        null_address["header"]["address"] = json!(null);
        let err = ConfigValidator::validate_config(&mut null_address).unwrap_err();
        assert_eq!(err, ValidationError::wrong_type(None, "address"));

        let mut null_flags = base_config(json!([]));
        null_flags["header"]["flags"] = json!(null);
        match ConfigValidator::load(null_flags) {
            Err(HmtlError::Validation(err)) => {
                assert_eq!(err.field, "flags");
                assert_eq!(err.reason, ValidationReason::WrongType);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_pixels_missing_rgbtype() {
        let mut data = base_config(json!([
            { "type": "pixels", "clockpin": 12, "datapin": 8, "numpixels": 45 }
        ]));
        let err = ConfigValidator::validate_config(&mut data).unwrap_err();

        assert_eq!(err, ValidationError::missing_field(Some(0), "rgbtype"));
    }

    #[test]
    fn test_unknown_and_missing_type() {
        let mut unknown = base_config(json!([{ "type": "strobe" }]));
        let err = ConfigValidator::validate_config(&mut unknown).unwrap_err();
        assert_eq!(err.reason, ValidationReason::UnknownType);

        let mut header_as_output = base_config(json!([{ "type": "header" }]));
        let err = ConfigValidator::validate_config(&mut header_as_output).unwrap_err();
        assert_eq!(err.reason, ValidationReason::UnknownType);

        let mut untyped = base_config(json!([{ "pin": 3 }]));
        let err = ConfigValidator::validate_config(&mut untyped).unwrap_err();
        assert_eq!(err, ValidationError::missing_field(Some(0), "type"));
    }

    #[test]
    fn test_load_produces_typed_config() {
        let data = base_config(json!([{ "type": "value", "pin": 3, "value": 255 }]));
        let config = ConfigValidator::load(data).unwrap();

        assert_eq!(config.header.address, 5);
        assert_eq!(config.header.flags, 0);
        assert_eq!(config.outputs.len(), 1);
        assert!(matches!(config.outputs[0], OutputConfig::Value(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::wrong_length(Some(2), "pins");
        assert_eq!(err.to_string(), "outputs[2].pins: wrong length");
    }
}
