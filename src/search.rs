//! Exact substring search anchored at an offset.
//!
//! Both helpers work on raw bytes: a multi-byte UTF-8 character is just its
//! constituent code units, and every offset is a byte offset.

use memchr::memmem;

/// Returns the first index of `pattern` in `text` that is `>= from`.
///
/// A negative `from` searches from the start. When `from` lies past the last
/// byte of `text` nothing is searched and `None` is returned.
///
/// ```rust
/// use fuzzy_bitap::forward_index_of;
///
/// assert_eq!(forward_index_of("hi world", "world", 3), Some(3));
/// assert_eq!(forward_index_of("hi world", "world", 4), None);
/// ```
pub fn forward_index_of(
    text: impl AsRef<[u8]>,
    pattern: impl AsRef<[u8]>,
    from: isize,
) -> Option<usize> {
    let (text, pattern) = (text.as_ref(), pattern.as_ref());
    if from > text.len() as isize - 1 {
        return None;
    }
    let from = from.max(0) as usize;
    find(&text[from..], pattern).map(|i| i + from)
}

/// Returns the last index of `pattern` in `text` such that the occurrence
/// ends at or before `through` (the byte at `through` included).
///
/// A negative `through` never matches; a `through` at or beyond the end of
/// `text` searches the whole of it.
///
/// ```rust
/// use fuzzy_bitap::backward_index_of;
///
/// assert_eq!(backward_index_of("hi world", "world", 6), None);
/// assert_eq!(backward_index_of("hi world", "world", 7), Some(3));
/// ```
pub fn backward_index_of(
    text: impl AsRef<[u8]>,
    pattern: impl AsRef<[u8]>,
    through: isize,
) -> Option<usize> {
    let (text, pattern) = (text.as_ref(), pattern.as_ref());
    if through < 0 {
        return None;
    }
    let end = (through as usize).saturating_add(1).min(text.len());
    rfind(&text[..end], pattern)
}

#[inline]
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    memmem::find(haystack, needle)
}

#[inline]
fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    memmem::rfind(haystack, needle)
}
