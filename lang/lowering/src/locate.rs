use jscst_miette_util::ToMiette;
use jscst_miette_util::span::Span;

use crate::result::TokenNotFound;
use crate::source::SourceText;

/// Locates tokens the upstream tree does not record.
///
/// Every search is bounded by a window `[start, end)` which the caller
/// derives from the positions of neighbouring nodes.
pub struct Locator<'s, 'a> {
    source: &'s SourceText<'a>,
    context: &'static str,
}

impl<'s, 'a> Locator<'s, 'a> {
    pub fn new(source: &'s SourceText<'a>, context: &'static str) -> Self {
        Locator { source, context }
    }

    /// The first occurrence of `token` in the window.
    pub fn forward(&self, token: &str, start: usize, end: usize) -> Result<usize, TokenNotFound> {
        self.source.find_forward(token, start, end).ok_or_else(|| self.not_found(token, start, end))
    }

    /// The last occurrence of `token` in the window.
    pub fn backward(&self, token: &str, start: usize, end: usize) -> Result<usize, TokenNotFound> {
        self.source
            .find_backward_in(token, start, end)
            .ok_or_else(|| self.not_found(token, start, end))
    }

    /// The first occurrence of `keyword` in the window that is a whole word.
    pub fn keyword(&self, keyword: &str, start: usize, end: usize) -> Result<usize, TokenNotFound> {
        self.source
            .find_keyword_forward(keyword, start, end)
            .ok_or_else(|| self.not_found(keyword, start, end))
    }

    /// The last occurrence of `keyword` in the window that is a whole word.
    pub fn keyword_backward(
        &self,
        keyword: &str,
        start: usize,
        end: usize,
    ) -> Result<usize, TokenNotFound> {
        self.source
            .find_keyword_backward(keyword, start, end)
            .ok_or_else(|| self.not_found(keyword, start, end))
    }

    /// `expected` itself if `keyword` occurs there. Otherwise the last
    /// occurrence of `keyword` in the window.
    pub fn keyword_at_or_before(
        &self,
        keyword: &str,
        expected: Option<usize>,
        start: usize,
        end: usize,
    ) -> Result<usize, TokenNotFound> {
        match expected.filter(|&offset| self.source.has_keyword_at(keyword, offset)) {
            Some(offset) => Ok(offset),
            None => self.keyword_backward(keyword, start, end),
        }
    }

    /// The quoted string literal with the given contents.
    pub fn string_literal(
        &self,
        value: &str,
        start: usize,
        end: usize,
    ) -> Result<(usize, usize), TokenNotFound> {
        self.source
            .find_string_literal(value, start, end)
            .ok_or_else(|| self.not_found(&format!("'{value}'"), start, end))
    }

    fn not_found(&self, token: &str, start: usize, end: usize) -> TokenNotFound {
        let span = (start <= self.source.len())
            .then(|| Span::from_exclusive(start, end.clamp(start, self.source.len())).to_miette());
        TokenNotFound { token: token.to_owned(), start, end, context: self.context, span }
    }
}

#[cfg(test)]
mod locate_tests {
    use super::*;
    use crate::cfg::ScanMode;

    #[test]
    fn found_token() {
        let source = SourceText::new("a ? b : c", ScanMode::SkipTrivia);
        let locator = Locator::new(&source, "Conditional");
        assert_eq!(locator.forward("?", 1, 4), Ok(2));
        assert_eq!(locator.backward(":", 5, 8), Ok(6));
    }

    #[test]
    fn missing_token_reports_window() {
        let source = SourceText::new("a /* ? */ b", ScanMode::SkipTrivia);
        let err = Locator::new(&source, "Conditional").forward("?", 1, 10).unwrap_err();
        assert_eq!(err.token, "?");
        assert_eq!((err.start, err.end), (1, 10));
        assert_eq!(err.context, "Conditional");
        assert!(err.span.is_some());
    }

    #[test]
    fn keyword_at_expected_offset() {
        let text = "export function f() {}";
        let source = SourceText::new(text, ScanMode::SkipTrivia);
        let locator = Locator::new(&source, "Function");
        assert_eq!(locator.keyword_at_or_before("function", Some(7), 0, 16), Ok(7));
        assert_eq!(locator.keyword_at_or_before("function", Some(5), 0, 16), Ok(7));
        assert_eq!(locator.keyword_at_or_before("function", None, 0, 16), Ok(7));
        assert!(locator.keyword_at_or_before("class", Some(5), 0, 16).is_err());
    }
}
