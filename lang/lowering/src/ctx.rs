use std::rc::Rc;

use jscst_ast::Module;
use jscst_cst::{Node, NodeKind, Span, Symbol, TokenKind};

use crate::builder::NodeBuilder;
use crate::cfg::LowerCfg;
use crate::deferred::DeferredTable;
use crate::export::ExportStatus;
use crate::intern::Interner;
use crate::locate::Locator;
use crate::result::{LoweringError, LoweringResult, TokenNotFound};
use crate::source::SourceText;

/// The state of a single lowering.
///
/// Besides the source text and the node stack, this tracks the state that
/// has to survive between sibling visits: call arguments waiting for their
/// callee, the one-shot flag that swallows the name of a function
/// declaration, and the tokens that could not be located.
pub struct Ctx<'a> {
    pub source: SourceText<'a>,
    cfg: &'a LowerCfg,
    module: Option<&'a Module>,
    pub builder: NodeBuilder,
    interner: Interner,
    pub deferred: DeferredTable,
    /// Set after a function declaration has been lowered. The binding of
    /// the declaration is visited next and must not produce a node.
    suppress_next_ident: bool,
    warnings: Vec<TokenNotFound>,
}

impl<'a> Ctx<'a> {
    pub fn new(text: &'a str, module: Option<&'a Module>, cfg: &'a LowerCfg) -> Self {
        let source = SourceText::new(text, cfg.scan_mode);
        let root = Node::new(NodeKind::ParseRoot, Span::from_exclusive(0, text.len()));
        Ctx {
            source,
            cfg,
            module,
            builder: NodeBuilder::new(root),
            interner: Interner::default(),
            deferred: DeferredTable::default(),
            suppress_next_ident: false,
            warnings: Vec::new(),
        }
    }

    pub fn module(&self) -> Option<&'a Module> {
        self.module
    }

    pub fn export_status(&self, name: &str) -> ExportStatus {
        ExportStatus::of(self.module, name)
    }

    // Ranges
    //
    //

    /// Convert an upstream `[start, finish)` range into a span, rejecting
    /// ranges that do not fit the source text.
    pub fn range(&self, start: usize, finish: usize) -> LoweringResult<Span> {
        let len = self.source.len();
        let valid = start <= finish
            && finish <= len
            && self.source.is_char_boundary(start)
            && self.source.is_char_boundary(finish);
        if !valid {
            return Err(Box::new(LoweringError::InvalidRange { start, finish, len, span: None }));
        }
        Ok(Span::from_exclusive(start, finish))
    }

    /// Where the gap before the next child of the open node begins: one past
    /// the previous sibling, or the start of the open node.
    pub fn gap_start(&self) -> usize {
        match self.builder.last_child() {
            Some(prev) if !prev.is_placeholder() => prev.end() + 1,
            Some(prev) => prev.end(),
            None => self.builder.current().start(),
        }
    }

    /// Whether the statement ending at the exclusive offset `finish` is
    /// terminated by a semicolon.
    pub fn ends_with_semicolon(&self, finish: usize) -> bool {
        let last = finish.checked_sub(1).and_then(|idx| self.source.byte_at(idx));
        if last == Some(b';') {
            return true;
        }
        self.source.next_significant(finish).and_then(|idx| self.source.byte_at(idx)) == Some(b';')
    }

    /// Like [`Ctx::ends_with_semicolon`], for a statement that may reach
    /// past `finish` once lowered.
    pub fn terminates(&self, node: &Node, finish: usize) -> bool {
        self.ends_with_semicolon(finish.max(node.end() + 1))
    }

    // Symbols
    //
    //

    pub fn intern(&mut self, text: &str) -> Rc<str> {
        self.interner.intern(text)
    }

    /// A symbol for `text` starting at `start`.
    pub fn symbol(&mut self, kind: TokenKind, start: usize, text: &str) -> Symbol {
        let end = start + text.len().max(1) - 1;
        Symbol::new(kind, Span::new(start, end), self.intern(text))
    }

    /// A symbol whose value is the source text it covers.
    pub fn source_symbol(&mut self, kind: TokenKind, span: Span) -> Symbol {
        let text = self.source.slice(span.start, span.end + 1).unwrap_or_default();
        Symbol::new(kind, span, self.intern(text))
    }

    pub fn locator(&self, context: &'static str) -> Locator<'_, 'a> {
        Locator::new(&self.source, context)
    }

    /// Continue with `fallback` if a token could not be located, unless
    /// token recovery is disabled.
    pub fn recover(
        &mut self,
        found: Result<usize, TokenNotFound>,
        fallback: usize,
    ) -> LoweringResult<usize> {
        match found {
            Ok(offset) => Ok(offset),
            Err(err) => {
                self.soft_fail(err)?;
                Ok(fallback)
            }
        }
    }

    /// Record a failed search as a warning, or fail if token recovery is
    /// disabled.
    pub fn soft_fail(&mut self, err: TokenNotFound) -> LoweringResult {
        if self.cfg.strict_tokens {
            return Err(err.into());
        }
        log::warn!("{err}, using a fallback position");
        self.warnings.push(err);
        Ok(())
    }

    /// Locate the first `token` in `[start, end)`, falling back to `start`.
    pub fn find_symbol(
        &mut self,
        kind: TokenKind,
        token: &str,
        context: &'static str,
        start: usize,
        end: usize,
    ) -> LoweringResult<Symbol> {
        let found = self.locator(context).forward(token, start, end);
        let offset = self.recover(found, start)?;
        Ok(self.symbol(kind, offset, token))
    }

    /// Locate the last `token` in `[start, end)`, falling back to the last
    /// position in the window where the token fits.
    pub fn find_symbol_backward(
        &mut self,
        kind: TokenKind,
        token: &str,
        context: &'static str,
        start: usize,
        end: usize,
    ) -> LoweringResult<Symbol> {
        let found = self.locator(context).backward(token, start, end);
        let fallback = end.saturating_sub(token.len()).max(start);
        let offset = self.recover(found, fallback)?;
        Ok(self.symbol(kind, offset, token))
    }

    /// Locate the keyword `keyword` in `[start, end)`, falling back to `start`.
    pub fn find_keyword(
        &mut self,
        keyword: &str,
        context: &'static str,
        start: usize,
        end: usize,
    ) -> LoweringResult<Symbol> {
        let found = self.locator(context).keyword(keyword, start, end);
        let offset = self.recover(found, start)?;
        Ok(self.symbol(TokenKind::Keyword, offset, keyword))
    }

    /// Locate the last keyword `keyword` in `[start, end)`. A keyword that
    /// cannot be located is recorded like any other token and left out.
    pub fn find_keyword_backward(
        &mut self,
        keyword: &str,
        context: &'static str,
        start: usize,
        end: usize,
    ) -> LoweringResult<Option<Symbol>> {
        match self.locator(context).keyword_backward(keyword, start, end) {
            Ok(offset) => Ok(Some(self.symbol(TokenKind::Keyword, offset, keyword))),
            Err(err) => {
                self.soft_fail(err)?;
                Ok(None)
            }
        }
    }

    /// `token` at `offset` if it is there, otherwise the first one in
    /// `[offset, end)`.
    pub fn symbol_at_or_after(
        &mut self,
        kind: TokenKind,
        token: &str,
        context: &'static str,
        offset: usize,
        end: usize,
    ) -> LoweringResult<Symbol> {
        if self.source.slice(offset, offset + token.len()) == Some(token) {
            return Ok(self.symbol(kind, offset, token));
        }
        self.find_symbol(kind, token, context, offset, end)
    }

    /// `token` ending at the exclusive offset `finish` if it is there,
    /// otherwise the last one in `[start, finish)`.
    pub fn symbol_ending_at(
        &mut self,
        kind: TokenKind,
        token: &str,
        context: &'static str,
        start: usize,
        finish: usize,
    ) -> LoweringResult<Symbol> {
        if let Some(offset) = finish.checked_sub(token.len()) {
            if offset >= start && self.source.slice(offset, finish) == Some(token) {
                return Ok(self.symbol(kind, offset, token));
            }
        }
        self.find_symbol_backward(kind, token, context, start, finish)
    }

    // Nodes
    //
    //

    /// Lower an identifier at its own range.
    pub fn identifier(&mut self, start: usize, finish: usize, name: &str) -> LoweringResult<Node> {
        let span = self.range(start, finish)?;
        let name = Symbol::new(TokenKind::Identifier, span, self.intern(name));
        Ok(Node::new(NodeKind::Identifier { name }, span))
    }

    /// Run `f` with `node` open and return the node with everything `f`
    /// attached. The node is closed even if `f` fails.
    pub fn open<F>(&mut self, node: Node, f: F) -> LoweringResult<Node>
    where
        F: FnOnce(&mut Self) -> LoweringResult,
    {
        self.builder.push(node);
        let result = f(self);
        let mut node = self.builder.pop()?;
        // Upstream ranges of string literals stop before the closing quote
        node.span = node.children().iter().fold(node.span, |span, child| span.merge(child.span));
        result.map(|()| node)
    }

    /// Like [`Ctx::open`], but attach the finished node to its parent.
    pub fn enter<F>(&mut self, node: Node, f: F) -> LoweringResult
    where
        F: FnOnce(&mut Self) -> LoweringResult,
    {
        let node = self.open(node, f)?;
        self.attach(node);
        Ok(())
    }

    pub fn attach(&mut self, node: Node) {
        self.builder.attach(node);
    }

    /// Wrap the last child of the open node in a group.
    pub fn group_last_child(&mut self) -> LoweringResult {
        let Some(last) = self.builder.last_child() else {
            let current = self.builder.current();
            return Err(LoweringError::structural(
                current.kind.name(),
                "no operand to parenthesize",
                Some(current.span),
            ));
        };
        let group = Node::new(NodeKind::Group, last.span);
        let index = self.builder.current().child_count() - 1;
        self.builder.wrap_child(index, group)
    }

    // Declarations
    //
    //

    pub fn suppress_next_ident(&mut self) {
        self.suppress_next_ident = true;
    }

    /// Read and clear the one-shot suppression flag.
    pub fn take_suppress(&mut self) -> bool {
        std::mem::take(&mut self.suppress_next_ident)
    }

    /// Return the finished tree together with the recorded warnings.
    pub fn finish(self) -> LoweringResult<(Node, Vec<TokenNotFound>)> {
        if !self.deferred.is_empty() {
            return Err(LoweringError::structural(
                "ParseRoot",
                format!("{} deferred nodes were never attached", self.deferred.len()),
                None,
            ));
        }
        log::trace!(
            "Interned {} distinct strings, {} lookups reused an entry",
            self.interner.len(),
            self.interner.hits()
        );
        let root = self.builder.finish()?;
        Ok((root, self.warnings))
    }
}
