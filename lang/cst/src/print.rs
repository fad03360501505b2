use jscst_printer::theme::ThemeExt;
use jscst_printer::tokens::{LPAREN, RPAREN, SEMI};
use jscst_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg};

use crate::{Node, Symbol, TokenKind};

// Nodes are printed as S-expressions:
//
// (Kind start..end sym@start..end ... child ...)

impl Print for Node {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let mut head = if self.is_placeholder() {
            alloc.placeholder(self.kind.name())
        } else {
            alloc.kind(self.kind.name())
        };
        if cfg.offsets {
            head = head.append(alloc.space()).append(alloc.offset(self.span.to_string()));
        }
        if self.semicolon_included {
            head = head.append(alloc.space()).append(alloc.keyword(SEMI));
        }
        if cfg.symbols {
            for symbol in self.symbols() {
                head = head.append(alloc.space()).append(symbol.print(cfg, alloc));
            }
        }

        let children = alloc.concat(
            self.children().iter().map(|child| alloc.line().append(child.print(cfg, alloc))),
        );

        alloc.text(LPAREN).append(head).append(children.nest(cfg.indent)).append(RPAREN).group()
    }
}

impl Print for Symbol {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let value = match self.kind {
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Regex
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => alloc.literal(self.value.to_string()),
            _ => alloc.keyword(&self.value),
        };
        if cfg.offsets {
            value.append("@").append(alloc.offset(self.span.to_string()))
        } else {
            value
        }
    }
}
