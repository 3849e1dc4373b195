use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing { field: &'static str },
    NotAString { field: &'static str },
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl ValidationError {
    /// Name of the argument that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::NotAString { field } | Self::Empty { field } => field,
            Self::InvalidPhoneNumber { .. } => "number",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is missing or null"),
            Self::NotAString { field } => write!(f, "{field} must be a string"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Missing { field: "number" };
        assert_eq!(err.to_string(), "number is missing or null");

        let err = ValidationError::NotAString { field: "message" };
        assert_eq!(err.to_string(), "message must be a string");

        let err = ValidationError::Empty { field: "number" };
        assert_eq!(err.to_string(), "number must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }

    #[test]
    fn field_names_the_offending_argument() {
        assert_eq!(ValidationError::Missing { field: "message" }.field(), "message");
        assert_eq!(
            ValidationError::InvalidPhoneNumber {
                input: "x".to_owned()
            }
            .field(),
            "number"
        );
    }
}
