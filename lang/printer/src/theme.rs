use pretty::{
    DocAllocator,
    termcolor::{Color, ColorSpec},
};

use super::types::*;

pub trait ThemeExt<'a> {
    fn kind(&'a self, text: &'a str) -> Builder<'a>;
    fn keyword(&'a self, text: &'a str) -> Builder<'a>;
    fn literal(&'a self, text: String) -> Builder<'a>;
    fn offset(&'a self, text: String) -> Builder<'a>;
    fn placeholder(&'a self, text: &'a str) -> Builder<'a>;
}

impl<'a> ThemeExt<'a> for Alloc<'a> {
    fn kind(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Kind)
    }

    fn keyword(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Keyword)
    }

    fn literal(&'a self, text: String) -> Builder<'a> {
        self.text(text).annotate(Anno::Literal)
    }

    fn offset(&'a self, text: String) -> Builder<'a> {
        self.text(text).annotate(Anno::Offset)
    }

    fn placeholder(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Placeholder)
    }
}

pub trait ColorExt {
    fn spec(self) -> ColorSpec;
}

impl ColorExt for Color {
    fn spec(self) -> ColorSpec {
        ColorSpec::new().set_fg(Some(self)).clone()
    }
}
