//! Offset/limit pagination primitives.
//!
//! Endpoints hand an already filtered and ordered sequence to [`paginate`]
//! together with a [`PageRequest`]. The result is a [`Page`] holding at most
//! `limit` items and a flag telling the caller whether further items exist
//! beyond the returned window.
//!
//! Out-of-range offsets are reported as [`PaginationError::OffsetOutOfRange`]
//! rather than producing an empty page. Offset zero is always in range so an
//! empty sequence still yields an (empty) first page.
//!
//! # Examples
//! ```
//! use std::num::NonZeroUsize;
//!
//! use pagination::{PageRequest, paginate};
//!
//! let limit = NonZeroUsize::new(2).expect("non-zero");
//! let page = paginate(vec![1, 2, 3], PageRequest::new(1, limit)).expect("in range");
//! assert_eq!(page.items(), &[2, 3]);
//! assert!(!page.has_more());
//! ```

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Offset and limit describing one window over a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    offset: usize,
    limit: NonZeroUsize,
}

impl PageRequest {
    /// Build a request for `limit` items starting at `offset`.
    #[must_use]
    pub const fn new(offset: usize, limit: NonZeroUsize) -> Self {
        Self { offset, limit }
    }

    /// Number of leading items skipped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Maximum number of items in the page.
    #[must_use]
    pub const fn limit(&self) -> NonZeroUsize {
        self.limit
    }

    /// Exclusive end index of the window, saturating at `usize::MAX`.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.limit.get())
    }
}

/// One window of items plus the more-results flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    has_more: bool,
}

impl<T> Page<T> {
    /// Assemble a page from parts.
    #[must_use]
    pub const fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// Items in the window, in sequence order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether items exist after the end of this window.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Split the page into its items and more-results flag.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, bool) {
        (self.items, self.has_more)
    }
}

/// Errors raised while slicing a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The offset points at or beyond the end of a sequence.
    #[error("offset {offset} is out of range for {available} items")]
    OffsetOutOfRange {
        /// Requested offset.
        offset: usize,
        /// Length of the sequence being paginated.
        available: usize,
    },
}

/// Slice `items` according to `request`.
///
/// Returns at most `limit` items starting at `offset`. `has_more` is set when
/// `offset + limit` is strictly below the sequence length.
///
/// # Errors
///
/// Returns [`PaginationError::OffsetOutOfRange`] when `offset` is non-zero
/// and not below the sequence length.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Result<Page<T>, PaginationError> {
    let available = items.len();
    let offset = request.offset();
    if offset > 0 && offset >= available {
        return Err(PaginationError::OffsetOutOfRange { offset, available });
    }

    let has_more = request.end() < available;
    let window = items
        .into_iter()
        .skip(offset)
        .take(request.limit().get())
        .collect();
    Ok(Page::new(window, has_more))
}
