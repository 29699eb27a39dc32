use thiserror::Error;

/// Errors raised by prefix lookup, unit handling and quantity arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    #[error("Prefix not found: {0}")]
    PrefixNotFound(String),

    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),

    #[error("The identity prefix cannot be removed")]
    ProtectedPrefix,

    #[error("Prefixes are not supported for {0}")]
    PrefixNotSupported(String),

    #[error("Cannot modify base unit '{0}'")]
    ImmutableUnit(String),

    #[error("Dimension mismatch: '{left}' is not compatible with '{right}'")]
    DimensionMismatch { left: String, right: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Fieldless discriminant of [`QuantityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PrefixNotFound,
    InvalidPrefix,
    ProtectedPrefix,
    PrefixNotSupported,
    ImmutableUnit,
    DimensionMismatch,
    UnsupportedOperation,
    TypeMismatch,
    InvalidArgument,
}

impl QuantityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuantityError::PrefixNotFound(_) => ErrorKind::PrefixNotFound,
            QuantityError::InvalidPrefix(_) => ErrorKind::InvalidPrefix,
            QuantityError::ProtectedPrefix => ErrorKind::ProtectedPrefix,
            QuantityError::PrefixNotSupported(_) => ErrorKind::PrefixNotSupported,
            QuantityError::ImmutableUnit(_) => ErrorKind::ImmutableUnit,
            QuantityError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            QuantityError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            QuantityError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            QuantityError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuantityError>;

/// Reject NaN and infinities at the boundary.
pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuantityError::InvalidArgument(format!(
            "{} must be finite, got {}",
            what, value
        )))
    }
}
