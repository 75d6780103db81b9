//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`UserName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserNameValidationError {
    /// The name is empty once trimmed of leading and trailing whitespace.
    Blank,
}

impl fmt::Display for UserNameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "user name must not be blank"),
        }
    }
}

impl std::error::Error for UserNameValidationError {}

/// Unique, human-chosen user name.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace. The original spelling is kept;
///   trimming is applied only for the blank check.
/// - Uniqueness across live users is case-sensitive and exact-match, and is
///   enforced by the directory, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserNameValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserNameValidationError::Blank);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user.
///
/// The identifier is assigned at construction and never changes; only the
/// name can be replaced, and only through the directory's rename operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    name: UserName,
}

impl User {
    /// Build a user with a freshly generated v4 identifier.
    pub fn with_name(name: UserName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    /// Rebuild a user around an identifier that already exists in storage.
    pub fn restore(id: Uuid, name: UserName) -> Self {
        Self { id, name }
    }

    /// Stable user identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The unique user name.
    pub fn name(&self) -> &UserName {
        &self.name
    }
}
