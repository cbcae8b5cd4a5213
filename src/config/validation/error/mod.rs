mod trait_display;
mod trait_error;

/// Why a configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    MissingField,
    WrongLength,
    /// Present but not an unsigned integer
    WrongType,
    UnknownType,
}

/// A configuration failed validation.
///
/// `output_index` is `None` for problems in the header or top-level sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub output_index: Option<usize>,
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn missing_field(output_index: Option<usize>, field: &str) -> Self {
        Self {
            output_index,
            field: field.to_string(),
            reason: ValidationReason::MissingField,
        }
    }

    pub fn wrong_length(output_index: Option<usize>, field: &str) -> Self {
        Self {
            output_index,
            field: field.to_string(),
            reason: ValidationReason::WrongLength,
        }
    }

    pub fn wrong_type(output_index: Option<usize>, field: &str) -> Self {
        Self {
            output_index,
            field: field.to_string(),
            reason: ValidationReason::WrongType,
        }
    }

    pub fn unknown_type(output_index: Option<usize>) -> Self {
        Self {
            output_index,
            field: "type".to_string(),
            reason: ValidationReason::UnknownType,
        }
    }
}
