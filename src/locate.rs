//! Locating the deletion span inside the loaded source.
//!
//! All lookups are plain substring and regex searches over the full file
//! content. Offsets are byte offsets into the unmodified source and are only
//! meaningful for that exact string.

use crate::constants;

/// Byte range `[start, end)` to cut from the source.
///
/// Computed fresh on every run and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionSpan {
    /// Offset of the start marker (inclusive).
    pub start: usize,
    /// Offset one past the matched closing pattern (exclusive).
    pub end: usize,
}

impl DeletionSpan {
    /// Number of bytes the span covers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A lookup that had to succeed for the patch to proceed.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// The first line of the function to delete is absent. Most likely the
    /// function was already removed, or the file changed shape.
    #[error("Could not find start marker: {0}")]
    StartMarkerNotFound(&'static str),
    /// The following declaration is absent at or after the start marker.
    #[error("Could not find context marker: {0}")]
    ContextMarkerNotFound(&'static str),
    /// The body no longer ends with the expected closing lines.
    #[error("Could not find function end")]
    EndPatternNotFound,
}

/// Offset of the first occurrence of the start marker.
pub fn find_start(source: &str) -> Result<usize, LocateError> {
    source
        .find(constants::START_MARKER)
        .ok_or(LocateError::StartMarkerNotFound(constants::START_MARKER))
}

/// Offset of the first occurrence of the context marker at or after `start`.
///
/// An occurrence before `start` does not count: the search only sees the
/// suffix beginning at the start marker.
pub fn find_context(source: &str, start: usize) -> Result<usize, LocateError> {
    source[start..]
        .find(constants::CONTEXT_MARKER)
        .map(|at| start + at)
        .ok_or(LocateError::ContextMarkerNotFound(constants::CONTEXT_MARKER))
}

/// End offset of the function body: the end of the first closing-pattern
/// match within `source[start..]`, re-based to the full text.
pub fn find_function_end(source: &str, start: usize) -> Result<usize, LocateError> {
    constants::get_function_end_re()
        .find(&source[start..])
        .map(|m| start + m.end())
        .ok_or(LocateError::EndPatternNotFound)
}

/// Up to `window` bytes of source immediately preceding `offset`.
///
/// Clamped to the start of the text and snapped back to a character
/// boundary, so the slice is always valid.
#[must_use]
pub fn context_before(source: &str, offset: usize, window: usize) -> &str {
    let mut lo = offset.saturating_sub(window);
    while lo > 0 && !source.is_char_boundary(lo) {
        lo -= 1;
    }
    &source[lo..offset]
}
