//! Domain-level error types.
//!
//! These errors are transport agnostic: the inbound HTTP adapter maps them
//! to status codes and the response envelope. Each failure kind carries a
//! stable wire name (the `name` field of an envelope error entry) and a
//! human-readable description.

/// Stable failure category for a [`Error`].
///
/// The first five kinds are the expected, recoverable-by-caller taxonomy;
/// the last two classify storage faults that do not match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A supplied user name failed validation before reaching the directory.
    InvalidName,
    /// The requested name is already held by a live user.
    DuplicateName,
    /// No live user holds the referenced name.
    UnknownName,
    /// A pagination argument is out of range.
    InvalidArgument,
    /// A required request parameter was absent.
    MissingParameter,
    /// The storage backend could not be reached.
    ServiceUnavailable,
    /// An unclassified failure inside the service.
    Internal,
}

impl ErrorCode {
    /// Wire name reported in the response envelope.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidName => "InvalidName",
            Self::DuplicateName => "DuplicateName",
            Self::UnknownName => "UnknownName",
            Self::InvalidArgument => "InvalidArgument",
            Self::MissingParameter => "MissingRequestParameter",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Internal => "GenericServerError",
        }
    }
}

/// Domain error payload: a failure category plus its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description surfaced to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// A name rejected by validation; the message states which rule failed.
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidName, message)
    }

    /// The given name is already taken by a live user.
    pub fn duplicate_name(name: impl AsRef<str>) -> Self {
        Self::new(
            ErrorCode::DuplicateName,
            format!("User '{}' is taken.", name.as_ref()),
        )
    }

    /// No live user holds the given name.
    pub fn unknown_name(name: impl AsRef<str>) -> Self {
        Self::new(
            ErrorCode::UnknownName,
            format!("User '{}' does not exist", name.as_ref()),
        )
    }

    /// An out-of-range pagination argument.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// A required request parameter was not supplied.
    pub fn missing_parameter(parameter: &str) -> Self {
        Self::new(
            ErrorCode::MissingParameter,
            format!("Required request parameter '{parameter}' is not present."),
        )
    }

    /// The storage backend is unreachable.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
