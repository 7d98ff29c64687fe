use super::Error;

/// Why an instance could not be encoded into a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The instance supplies no value for a declared member.
    MissingValue,

    /// A list holds a different number of elements than its declared size, or a record
    /// holds more values than the type declares.
    SizeMismatch,

    /// A value does not have the member's declared type.
    TypeMismatch,
}

impl EncodeError {
    fn as_str(self) -> &'static str {
        match self {
            EncodeError::MissingValue => "missing value",
            EncodeError::SizeMismatch => "size mismatch",
            EncodeError::TypeMismatch => "type mismatch",
        }
    }
}

/// Error when an instance disagrees with its type's descriptor.
///
/// This signals a bug in the caller's data, not a transient failure.
#[derive(Debug)]
pub(super) struct EncodeFailed {
    reason: EncodeError,
    message: Box<str>,
}

impl std::error::Error for EncodeFailed {}

impl core::fmt::Display for EncodeFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "encode failed: {}: {}", self.reason.as_str(), self.message)
    }
}

impl Error {
    /// Creates an encode error.
    pub fn encode(reason: EncodeError, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Encode(EncodeFailed {
            reason,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an encode error.
    pub fn is_encode(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Encode(_))
    }

    /// Returns the encode failure reason, if this is an encode error.
    pub fn encode_error(&self) -> Option<EncodeError> {
        match self.kind() {
            super::ErrorKind::Encode(err) => Some(err.reason),
            _ => None,
        }
    }
}
