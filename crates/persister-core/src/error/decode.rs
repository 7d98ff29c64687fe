use super::Error;

/// Why a result row could not be decoded into an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The row holds a different number of values than the type has columns.
    ArityMismatch,

    /// A positional value cannot be read as the column's declared type.
    TypeMismatch,
}

impl DecodeError {
    fn as_str(self) -> &'static str {
        match self {
            DecodeError::ArityMismatch => "arity mismatch",
            DecodeError::TypeMismatch => "type mismatch",
        }
    }
}

/// Error when a row's shape disagrees with the type's flattened schema.
///
/// Usually means the stored table and the code have drifted apart.
#[derive(Debug)]
pub(super) struct DecodeFailed {
    reason: DecodeError,
    message: Box<str>,
}

impl std::error::Error for DecodeFailed {}

impl core::fmt::Display for DecodeFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "decode failed: {}: {}", self.reason.as_str(), self.message)
    }
}

impl Error {
    /// Creates a decode error.
    pub fn decode(reason: DecodeError, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Decode(DecodeFailed {
            reason,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Decode(_))
    }

    /// Returns the decode failure reason, if this is a decode error.
    pub fn decode_error(&self) -> Option<DecodeError> {
        match self.kind() {
            super::ErrorKind::Decode(err) => Some(err.reason),
            _ => None,
        }
    }
}
