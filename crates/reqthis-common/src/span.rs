//! Source location tracking.
//!
//! Spans are half-open byte ranges into the analyzed source, carried on
//! every syntax node and copied verbatim onto the findings that reference
//! them.

use serde::Serialize;

/// A half-open byte range `[start, end)` in the analyzed source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Span {
        Span { start, end }
    }

    /// A zero-width span at offset 0, for synthesized nodes.
    pub const EMPTY: Span = Span { start: 0, end: 0 };

    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }
}
