mod check_optional;
mod check_required;
mod check_unsigned;
mod validate;
mod validate_config;
mod validate_output;

/// Structural checks on a configuration before anything is encoded
pub struct ConfigValidator;
