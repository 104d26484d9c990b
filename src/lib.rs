//! Error-tolerant substring location.
//!
//! Given a text, a short pattern and the offset where the pattern is expected,
//! [`Matcher::locate`] finds the offset whose content best resembles the
//! pattern, trading edit errors against drift from the expected offset. This
//! is the primitive a patch tool needs to relocate hunk context that has moved
//! because of upstream edits.
//!
//! ```rust
//! use fuzzy_bitap::Matcher;
//!
//! let matcher = Matcher::default();
//! let text = "I am the very model of a modern major general.";
//! assert_eq!(matcher.locate(text, "model", 14), Some(14));
//! assert_eq!(matcher.locate(text, "modle", 10), Some(14));
//! assert_eq!(matcher.locate("", "anything", 0), None);
//! ```
//!
//! Text and pattern are treated as raw bytes and every offset is a byte
//! offset; multi-byte UTF-8 characters are matched code unit by code unit.

mod bitap;
mod builder;
mod error;
mod search;
mod structs;

pub use builder::MatcherBuilder;
pub use error::ConfigError;
pub use search::{backward_index_of, forward_index_of};
pub use structs::*;

use tracing::trace;

/// Fuzzy locator engine
impl Matcher {
    /// Locates the best instance of `pattern` in `text` near `loc`.
    ///
    /// `loc` is clamped into `[0, text.len()]`. Returns `None` when nothing
    /// scores within the configured threshold.
    #[inline]
    pub fn locate(
        &self,
        text: impl AsRef<[u8]>,
        pattern: impl AsRef<[u8]>,
        loc: isize,
    ) -> Option<usize> {
        self.find(text, pattern, loc).map(|located| located.offset)
    }

    /// Like [`locate`](Self::locate), but also reports the score of the match
    /// and which path produced it.
    pub fn find(
        &self,
        text: impl AsRef<[u8]>,
        pattern: impl AsRef<[u8]>,
        loc: isize,
    ) -> Option<Located> {
        let (text, pattern) = (text.as_ref(), pattern.as_ref());
        let loc = loc.clamp(0, text.len() as isize) as usize;

        if text == pattern {
            // Shortcut, the search itself would not guarantee 0 here.
            trace!("locate: text and pattern are identical");
            return Some(Located {
                offset: 0,
                score: 0.0,
                kind: LocateKind::Identical,
            });
        }
        if text.is_empty() {
            trace!("locate: empty text");
            return None;
        }
        // Includes the empty pattern.
        if text.get(loc..loc + pattern.len()) == Some(pattern) {
            trace!("locate: exact match at {loc}");
            return Some(Located {
                offset: loc,
                score: 0.0,
                kind: LocateKind::ExactAtLocation,
            });
        }

        let found = self.bitap_search(text, pattern, loc);
        trace!("locate: bitap result {found:?}");
        found.map(|(offset, score)| Located {
            offset,
            score,
            kind: LocateKind::Fuzzy,
        })
    }
}
