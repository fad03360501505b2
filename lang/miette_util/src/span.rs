use std::fmt;
use std::ops::RangeInclusive;

/// A byte range in a source file.
///
/// Both ends are inclusive: a span covering the single character at
/// offset 3 is `Span::new(3, 3)`. This is the convention used by every
/// node and symbol of the concrete syntax tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span from an inclusive start and end offset.
    pub fn new(start: usize, end: usize) -> Span {
        assert!(end >= start, "span end {end} lies before span start {start}");

        Span { start, end }
    }

    /// Convert a half-open `[start, finish)` range into an inclusive span.
    ///
    /// Empty ranges collapse onto their start offset so that the result
    /// always satisfies `start <= end`.
    ///
    /// ```rust
    /// use jscst_miette_util::span::Span;
    ///
    /// assert_eq!(Span::from_exclusive(4, 9), Span::new(4, 8));
    /// assert_eq!(Span::from_exclusive(4, 4), Span::new(4, 4));
    /// ```
    pub fn from_exclusive(start: usize, finish: usize) -> Span {
        Span { start, end: finish.saturating_sub(1).max(start) }
    }

    /// A span covering exactly one offset.
    pub const fn point(offset: usize) -> Span {
        Span { start: offset, end: offset }
    }

    /// Number of bytes covered by the span.
    pub fn len(self) -> usize {
        self.end - self.start + 1
    }

    /// Combine two spans by taking the start of the earlier span
    /// and the end of the later span.
    ///
    /// Note: this will work even if the two spans are disjoint.
    ///
    /// ```rust
    /// use jscst_miette_util::span::Span;
    ///
    /// let span1 = Span::new(0, 4);
    /// let span2 = Span::new(10, 16);
    ///
    /// assert_eq!(Span::merge(span1, span2), Span::new(0, 16));
    /// ```
    pub fn merge(self, other: Span) -> Span {
        use std::cmp::{max, min};

        Span::new(min(self.start, other.start), max(self.end, other.end))
    }

    /// Whether `other` lies completely inside `self`.
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the offset lies inside the span.
    pub fn contains_offset(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// A helper function to tell whether two spans do not overlap.
    pub fn disjoint(self, other: Span) -> bool {
        self.end < other.start || other.end < self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<RangeInclusive<usize>> for Span {
    fn from(range: RangeInclusive<usize>) -> Span {
        Span::new(*range.start(), *range.end())
    }
}

impl From<Span> for RangeInclusive<usize> {
    fn from(span: Span) -> RangeInclusive<usize> {
        span.start..=span.end
    }
}

#[cfg(test)]
mod test {
    use super::Span;

    #[test]
    fn test_merge() {
        // overlap
        let a = Span::from(1..=5);
        let b = Span::from(3..=10);
        assert_eq!(a.merge(b), Span::from(1..=10));
        assert_eq!(b.merge(a), Span::from(1..=10));

        // disjoint
        let ten_twenty = (10..=20).into();
        assert_eq!(a.merge(ten_twenty), (1..=20).into());

        // identity
        assert_eq!(a.merge(a), a);
    }

    #[test]
    fn test_disjoint() {
        let a = Span::from(1..=5);
        let b = Span::from(5..=10);
        let c = Span::from(6..=10);
        assert!(!a.disjoint(b));
        assert!(a.disjoint(c));
        assert!(c.disjoint(a));
    }

    #[test]
    fn test_contains() {
        let outer = Span::new(0, 10);
        assert!(outer.contains(Span::new(0, 10)));
        assert!(outer.contains(Span::point(4)));
        assert!(!outer.contains(Span::new(5, 11)));
        assert!(outer.contains_offset(10));
        assert!(!outer.contains_offset(11));
    }

    #[test]
    fn test_len() {
        assert_eq!(Span::point(3).len(), 1);
        assert_eq!(Span::new(3, 7).len(), 5);
    }
}
