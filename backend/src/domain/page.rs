//! Offset pagination primitives.
//!
//! Pages are 1-based on the wire; the repository layer works with the
//! derived offset/limit pair. Totals are computed at the same logical
//! instant as the page contents by the adapter serving the request.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Validation errors returned by [`PageRequest::new`].
///
/// The display strings are part of the client-visible contract and are
/// surfaced verbatim in `InvalidArgument` responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequestValidationError {
    /// The 1-based page index was zero or negative.
    NonPositivePage,
    /// The page size was zero or negative.
    NonPositiveSize,
}

impl fmt::Display for PageRequestValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePage => write!(f, "Page must be greater than 0"),
            Self::NonPositiveSize => write!(f, "Size must be greater than 0"),
        }
    }
}

impl std::error::Error for PageRequestValidationError {}

/// A validated pagination request.
///
/// ## Invariants
/// - `page >= 1` and `size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Validate a 1-based page index and page size.
    ///
    /// The page check runs first, mirroring the order in which the two
    /// arguments are reported to clients.
    pub fn new(page: i64, size: i64) -> Result<Self, PageRequestValidationError> {
        if page <= 0 {
            return Err(PageRequestValidationError::NonPositivePage);
        }
        if size <= 0 {
            return Err(PageRequestValidationError::NonPositiveSize);
        }
        Ok(Self { page, size })
    }

    /// Number of records skipped before this page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }

    /// Maximum number of records on this page.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// One page of results together with collection-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records on this page, in the directory's documented order.
    pub elements: Vec<T>,
    /// `ceil(total_elements_count / size)` for the requested size.
    #[schema(example = 1)]
    pub total_page_count: i64,
    /// Count of all live records at the time the page was read.
    #[schema(example = 10)]
    pub total_elements_count: i64,
}

impl<T> Page<T> {
    /// Assemble a page from its contents and the collection totals.
    pub fn from_parts(elements: Vec<T>, total_elements_count: i64, size: i64) -> Self {
        Self {
            elements,
            total_page_count: (total_elements_count + size - 1) / size,
            total_elements_count,
        }
    }
}
