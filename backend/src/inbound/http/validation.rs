//! Shared validation helpers for inbound HTTP adapters.
//!
//! Name rules are rejected here, before any handler consults the
//! directory: absent parameters, blank names, and renames where both
//! names are the same string.

use crate::domain::{Error, UserName};

/// Client-visible description for a blank or whitespace-only name.
const BLANK_NAME: &str = "User name cannot be empty.";

/// Client-visible description for a rename onto the same name.
const SAME_NAME: &str = "Current user name same as new user name.";

/// Reject an absent or blank `name` query parameter.
///
/// Returns the validated name; the parameter label only feeds the
/// missing-parameter description.
pub(crate) fn require_name(value: Option<&str>, parameter: &str) -> Result<UserName, Error> {
    let raw = value.ok_or_else(|| Error::missing_parameter(parameter))?;
    UserName::new(raw).map_err(|_| Error::invalid_name(BLANK_NAME))
}

/// Reject a rename whose names are byte-for-byte equal.
///
/// Checked before the blank checks, so two equal blank inputs report the
/// same-name failure.
pub(crate) fn reject_same_name(current: &str, replacement: &str) -> Result<(), Error> {
    if current == replacement {
        return Err(Error::invalid_name(SAME_NAME));
    }
    Ok(())
}
