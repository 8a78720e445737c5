use thiserror::Error;

/// Raised when a patient record is missing one of the required vital signs.
///
/// Only presence is checked. Values outside physiological ranges are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl ValidationError {
    /// Name of the offending field, as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
        }
    }
}
