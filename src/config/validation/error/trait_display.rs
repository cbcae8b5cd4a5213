use super::{ValidationError, ValidationReason};

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ValidationReason::MissingField => "missing required field",
            ValidationReason::WrongLength => "wrong length",
            ValidationReason::WrongType => "not an unsigned integer",
            ValidationReason::UnknownType => "unknown output type",
        };
        f.write_str(text)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.output_index {
            Some(index) => write!(f, "outputs[{}].{}: {}", index, self.field, self.reason),
            None => write!(f, "{}: {}", self.field, self.reason),
        }
    }
}
