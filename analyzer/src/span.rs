/// Byte range `[start, end)` into the source text.
///
/// Both ends fall on UTF-8 character boundaries of the text the span was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "reversed span {start}..{end}");
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    pub fn at(pos: u32) -> Self {
        Span::new(pos, pos)
    }

    /// Smallest span that covers both `self` and `other`.
    pub fn cover(self, other: Span) -> Self {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}
