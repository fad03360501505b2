/// How the source oracle treats comments and string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Token searches never match inside comments, string literals,
    /// template literals or regular expression literals.
    #[default]
    SkipTrivia,
    /// Token searches look at the raw text.
    Raw,
}

#[derive(Debug, Clone)]
pub struct LowerCfg {
    pub scan_mode: ScanMode,
    /// Fail instead of recovering when a token cannot be located
    pub strict_tokens: bool,
    /// Check the invariants of the produced tree before returning it
    pub verify: bool,
}

impl Default for LowerCfg {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::default(),
            strict_tokens: false,
            verify: cfg!(debug_assertions),
        }
    }
}

impl LowerCfg {
    /// A configuration that fails on every token that cannot be located
    /// and always verifies the result.
    pub fn strict() -> Self {
        Self { strict_tokens: true, verify: true, ..Self::default() }
    }
}
