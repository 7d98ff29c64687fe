use super::Error;

/// Why a type declaration could not be turned into a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorError {
    /// The type declares no persisted members.
    NoMembers,

    /// A list member declares a size below one, or a single-valued member declares a size
    /// other than one.
    InvalidSize,

    /// The type embeds itself, directly or through other types.
    CyclicType,

    /// A primitive member has no SQL storage type.
    UnsupportedType,

    /// Two flattened columns share a qualified name.
    DuplicateColumn,
}

impl DescriptorError {
    fn as_str(self) -> &'static str {
        match self {
            DescriptorError::NoMembers => "no persisted members",
            DescriptorError::InvalidSize => "invalid member size",
            DescriptorError::CyclicType => "cyclic type",
            DescriptorError::UnsupportedType => "unsupported type",
            DescriptorError::DuplicateColumn => "duplicate column",
        }
    }
}

/// Error when a type declaration is malformed.
///
/// These are fatal and never retried: the declaration has to change.
#[derive(Debug)]
pub(super) struct InvalidDescriptor {
    reason: DescriptorError,
    message: Box<str>,
}

impl std::error::Error for InvalidDescriptor {}

impl core::fmt::Display for InvalidDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid descriptor: {}: {}",
            self.reason.as_str(),
            self.message
        )
    }
}

impl Error {
    /// Creates an invalid descriptor error.
    pub fn invalid_descriptor(reason: DescriptorError, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDescriptor(InvalidDescriptor {
            reason,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid descriptor error.
    pub fn is_invalid_descriptor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDescriptor(_))
    }

    /// Returns the descriptor failure reason, if this is an invalid descriptor error.
    pub fn descriptor_error(&self) -> Option<DescriptorError> {
        match self.kind() {
            super::ErrorKind::InvalidDescriptor(err) => Some(err.reason),
            _ => None,
        }
    }
}
