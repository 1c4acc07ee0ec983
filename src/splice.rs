//! Applying the deletion to the source text.
//!
//! The cut is a single byte-range removal: prefix and suffix are copied
//! unchanged, so every byte around the span survives exactly.

use crate::constants;
use crate::locate::DeletionSpan;

/// A span that cannot be applied to the source.
///
/// The offsets produced by the marker lookups always satisfy these checks;
/// they guard the splice against any other caller.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum SpliceError {
    /// Span start lies past its end.
    #[error("Span start {start} is past its end {end}")]
    Inverted {
        /// Start offset of the bad span
        start: usize,
        /// End offset of the bad span
        end: usize,
    },
    /// Span end lies past the end of the source.
    #[error("Span end {end} is out of bounds for source of length {len}")]
    OutOfBounds {
        /// End offset of the bad span
        end: usize,
        /// Length of the source
        len: usize,
    },
    /// A span bound splits a UTF-8 sequence.
    #[error("Span [{start}, {end}) does not fall on character boundaries")]
    NotCharAligned {
        /// Start offset of the bad span
        start: usize,
        /// End offset of the bad span
        end: usize,
    },
}

/// Remove `span` from `source` and return the remaining text.
///
/// # Errors
///
/// Returns an error if the span is inverted, out of bounds, or not aligned
/// to character boundaries.
pub fn splice_out(source: &str, span: DeletionSpan) -> Result<String, SpliceError> {
    if span.start > span.end {
        return Err(SpliceError::Inverted {
            start: span.start,
            end: span.end,
        });
    }
    if span.end > source.len() {
        return Err(SpliceError::OutOfBounds {
            end: span.end,
            len: source.len(),
        });
    }
    if !source.is_char_boundary(span.start) || !source.is_char_boundary(span.end) {
        return Err(SpliceError::NotCharAligned {
            start: span.start,
            end: span.end,
        });
    }

    let mut patched = String::with_capacity(source.len() - span.len());
    patched.push_str(&source[..span.start]);
    patched.push_str(&source[span.end..]);
    Ok(patched)
}

/// Collapse runs of three or more newlines down to two.
///
/// The patch pipeline does not call this: the rewritten file keeps its
/// original spacing around the cut.
#[must_use]
pub fn collapse_blank_lines(source: &str) -> String {
    constants::get_blank_run_re()
        .replace_all(source, "\n\n")
        .into_owned()
}
