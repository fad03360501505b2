use crate::cfg::ScanMode;

/// Keywords after which a `/` starts a regular expression literal
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    Comment,
    /// String, template or regular expression literal
    Literal,
}

/// A range of the source text that token searches skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub start: usize,
    /// Exclusive end
    pub end: usize,
}

/// The source text of one program together with search primitives.
///
/// All offsets are byte offsets. Windows are half-open `[start, end)`.
/// The text is lexed once on construction to find comments and literals.
/// Unless the scan mode is [`ScanMode::Raw`], searches never report a
/// match that starts inside one of those ranges.
#[derive(Debug)]
pub struct SourceText<'a> {
    text: &'a str,
    trivia: Vec<Trivia>,
    mode: ScanMode,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str, mode: ScanMode) -> Self {
        let trivia = Lexer::new(text.as_bytes()).run();
        log::trace!("Found {} comment and literal ranges in {} bytes", trivia.len(), text.len());
        SourceText { text, trivia, mode }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        self.text.get(start..end)
    }

    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(offset).copied()
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset..)?.chars().next()
    }

    pub fn is_char_boundary(&self, offset: usize) -> bool {
        self.text.is_char_boundary(offset)
    }

    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }

    /// The comment or literal containing `offset`, regardless of the scan mode.
    pub fn trivia_at(&self, offset: usize) -> Option<&Trivia> {
        let idx = self.trivia.partition_point(|trivia| trivia.end <= offset);
        self.trivia.get(idx).filter(|trivia| trivia.start <= offset)
    }

    /// Whether searches skip `offset`.
    pub fn in_trivia(&self, offset: usize) -> bool {
        self.mode == ScanMode::SkipTrivia && self.trivia_at(offset).is_some()
    }

    fn matches_at(&self, pattern: &str, offset: usize) -> bool {
        self.text.as_bytes()[offset..].starts_with(pattern.as_bytes()) && !self.in_trivia(offset)
    }

    fn keyword_at(&self, keyword: &str, offset: usize) -> bool {
        if !self.matches_at(keyword, offset) {
            return false;
        }
        if !keyword.bytes().all(|b| b.is_ascii_alphabetic()) {
            return true;
        }
        let before = offset.checked_sub(1).and_then(|idx| self.byte_at(idx));
        let after = self.byte_at(offset + keyword.len());
        !before.is_some_and(is_ident_byte) && !after.is_some_and(is_ident_byte)
    }

    // Searches
    //
    //

    /// First occurrence of `pattern` starting in `[start, end)`.
    pub fn find_forward(&self, pattern: &str, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.len());
        (start..end).find(|&idx| self.matches_at(pattern, idx))
    }

    /// Last occurrence of `pattern` starting in `[start, end)`.
    pub fn find_backward_in(&self, pattern: &str, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.len());
        (start..end).rev().find(|&idx| self.matches_at(pattern, idx))
    }

    /// Last occurrence of `pattern` starting at or before `upto`.
    pub fn find_backward(&self, pattern: &str, upto: usize) -> Option<usize> {
        self.find_backward_in(pattern, 0, upto.saturating_add(1))
    }

    /// First occurrence of `keyword` in `[start, end)` that is not part of a
    /// longer identifier.
    pub fn find_keyword_forward(&self, keyword: &str, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.len());
        (start..end).find(|&idx| self.keyword_at(keyword, idx))
    }

    /// Last occurrence of `keyword` in `[start, end)` that is not part of a
    /// longer identifier.
    pub fn find_keyword_backward(&self, keyword: &str, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.len());
        (start..end).rev().find(|&idx| self.keyword_at(keyword, idx))
    }

    /// Whether `keyword` occurs exactly at `offset`.
    pub fn has_keyword_at(&self, keyword: &str, offset: usize) -> bool {
        offset < self.len() && self.keyword_at(keyword, offset)
    }

    /// The first string literal starting in `[start, end)` whose unquoted
    /// text is `value`. Returns the offsets of the opening quote and one
    /// past the closing quote.
    pub fn find_string_literal(
        &self,
        value: &str,
        start: usize,
        end: usize,
    ) -> Option<(usize, usize)> {
        self.trivia
            .iter()
            .filter(|trivia| trivia.kind == TriviaKind::Literal)
            .filter(|trivia| start <= trivia.start && trivia.start < end)
            .find(|trivia| {
                let bytes = &self.text.as_bytes()[trivia.start..trivia.end];
                bytes.len() == value.len() + 2
                    && matches!(bytes[0], b'\'' | b'"')
                    && bytes[bytes.len() - 1] == bytes[0]
                    && &bytes[1..bytes.len() - 1] == value.as_bytes()
            })
            .map(|trivia| (trivia.start, trivia.end))
    }

    /// The first offset at or after `from` that is neither whitespace nor,
    /// unless scanning raw text, part of a comment.
    pub fn next_significant(&self, from: usize) -> Option<usize> {
        let mut idx = from;
        while idx < self.len() {
            if let Some(trivia) = self.trivia_at(idx) {
                if trivia.kind == TriviaKind::Comment && self.mode == ScanMode::SkipTrivia {
                    idx = trivia.end;
                    continue;
                }
            }
            if !self.text.as_bytes()[idx].is_ascii_whitespace() {
                return Some(idx);
            }
            idx += 1;
        }
        None
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

// Lexer
//
//

/// Finds the comments and literals of a source text.
///
/// Whether a `/` starts a regular expression is decided by the preceding
/// significant character, which is an approximation: `a++ / b` is misread.
struct Lexer<'b> {
    bytes: &'b [u8],
    pos: usize,
    trivia: Vec<Trivia>,
    /// Brace depth inside each open template substitution
    templates: Vec<usize>,
    last_significant: Option<usize>,
}

impl<'b> Lexer<'b> {
    fn new(bytes: &'b [u8]) -> Self {
        Lexer { bytes, pos: 0, trivia: Vec::new(), templates: Vec::new(), last_significant: None }
    }

    fn run(mut self) -> Vec<Trivia> {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            let next = self.bytes.get(self.pos + 1).copied();
            match b {
                b'/' if next == Some(b'/') => {
                    let end = find_bytes(self.bytes, b"\n", self.pos).unwrap_or(self.bytes.len());
                    self.push(TriviaKind::Comment, self.pos, end);
                }
                b'/' if next == Some(b'*') => {
                    let end = find_bytes(self.bytes, b"*/", self.pos + 2)
                        .map(|idx| idx + 2)
                        .unwrap_or(self.bytes.len());
                    self.push(TriviaKind::Comment, self.pos, end);
                }
                b'/' if self.regex_allowed() => match self.regex_end() {
                    Some(end) => self.push(TriviaKind::Literal, self.pos, end),
                    None => self.significant(),
                },
                b'\'' | b'"' => {
                    let end = self.string_end(b);
                    self.push(TriviaKind::Literal, self.pos, end);
                }
                b'`' => self.template(self.pos),
                b'{' => {
                    if let Some(depth) = self.templates.last_mut() {
                        *depth += 1;
                    }
                    self.significant();
                }
                b'}' => match self.templates.last_mut() {
                    Some(0) => {
                        self.templates.pop();
                        self.template(self.pos);
                    }
                    Some(depth) => {
                        *depth -= 1;
                        self.significant();
                    }
                    None => self.significant(),
                },
                b if b.is_ascii_whitespace() => self.pos += 1,
                _ => self.significant(),
            }
        }
        self.trivia
    }

    fn significant(&mut self) {
        self.last_significant = Some(self.pos);
        self.pos += 1;
    }

    fn push(&mut self, kind: TriviaKind, start: usize, end: usize) {
        self.trivia.push(Trivia { kind, start, end });
        if kind == TriviaKind::Literal {
            self.last_significant = Some(end - 1);
        }
        self.pos = end;
    }

    fn regex_allowed(&self) -> bool {
        let Some(last) = self.last_significant else {
            return true;
        };
        let b = self.bytes[last];
        if b"(,=:[!&|?{};+-*%<>~^".contains(&b) {
            return true;
        }
        if !is_ident_byte(b) {
            return false;
        }
        let word_start = (0..=last).rev().take_while(|&idx| is_ident_byte(self.bytes[idx])).last();
        let word = word_start.map(|start| &self.bytes[start..=last]).unwrap_or_default();
        REGEX_PRECEDING_KEYWORDS.iter().any(|kw| kw.as_bytes() == word)
    }

    /// One past the end of the regular expression starting at the current
    /// position, including its flags.
    fn regex_end(&self) -> Option<usize> {
        let mut idx = self.pos + 1;
        let mut in_class = false;
        while idx < self.bytes.len() {
            match self.bytes[idx] {
                b'\\' => idx += 1,
                b'\n' => return None,
                b'[' => in_class = true,
                b']' => in_class = false,
                b'/' if !in_class => {
                    idx += 1;
                    while idx < self.bytes.len() && is_ident_byte(self.bytes[idx]) {
                        idx += 1;
                    }
                    return Some(idx);
                }
                _ => {}
            }
            idx += 1;
        }
        None
    }

    /// One past the closing quote. Unterminated strings end at the line end.
    fn string_end(&self, quote: u8) -> usize {
        let mut idx = self.pos + 1;
        while idx < self.bytes.len() {
            match self.bytes[idx] {
                b'\\' => idx += 1,
                b'\n' => return idx,
                b if b == quote => return idx + 1,
                _ => {}
            }
            idx += 1;
        }
        self.bytes.len()
    }

    /// Lex template text starting at the opening backtick or at the `}`
    /// closing a substitution, up to the closing backtick or the next `${`.
    fn template(&mut self, start: usize) {
        let mut idx = start + 1;
        while idx < self.bytes.len() {
            match self.bytes[idx] {
                b'\\' => idx += 1,
                b'`' => {
                    self.push(TriviaKind::Literal, start, idx + 1);
                    return;
                }
                b'$' if self.bytes.get(idx + 1) == Some(&b'{') => {
                    self.push(TriviaKind::Literal, start, idx + 2);
                    self.templates.push(0);
                    return;
                }
                _ => {}
            }
            idx += 1;
        }
        self.push(TriviaKind::Literal, start, self.bytes.len());
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack.get(from..)?.windows(needle.len()).position(|w| w == needle).map(|idx| idx + from)
}
