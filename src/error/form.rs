use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Names of the fields that were empty after trimming.
    MissingFields(Vec<&'static str>),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MissingFields(fields) => write!(f, "Missing fields: {}", fields.join(", ")),
        }
    }
}

impl std::error::Error for FormError {}
