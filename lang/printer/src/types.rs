#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anno {
    /// Name of a node kind, e.g. `For`
    Kind,
    /// Keyword and punctuation symbols
    Keyword,
    /// Identifier and literal values
    Literal,
    /// Byte offsets
    Offset,
    /// Empty placeholders inserted to keep arity fixed
    Placeholder,
}

pub type Alloc<'a> = pretty::Arena<'a, Anno>;
pub type Builder<'a> = pretty::DocBuilder<'a, Alloc<'a>, Anno>;

pub trait Print {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a>;
}

impl<T: Print> Print for &T {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        T::print(self, cfg, alloc)
    }
}

impl<T: Print> Print for Box<T> {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        T::print(self, cfg, alloc)
    }
}

#[derive(Debug, Clone)]
pub struct PrintCfg {
    /// The width of the output terminal/device. Width is used for
    /// the insertion of linebreaks.
    pub width: usize,
    /// How many spaces of indentation are used
    pub indent: isize,
    /// Whether to print the located symbols of each node
    pub symbols: bool,
    /// Whether to print byte offsets
    pub offsets: bool,
}

impl Default for PrintCfg {
    fn default() -> Self {
        Self { width: crate::DEFAULT_WIDTH, indent: 2, symbols: true, offsets: true }
    }
}

impl PrintCfg {
    /// A configuration that never breaks lines.
    ///
    /// Useful for comparing tree shapes in tests and log output.
    pub fn single_line() -> Self {
        Self { width: usize::MAX / 2, ..Self::default() }
    }
}
