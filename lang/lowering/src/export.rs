use jscst_ast::Module;

/// Whether a binding is exported from its module, and whether as the default export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportStatus {
    pub is_exported: bool,
    pub is_default: bool,
}

impl ExportStatus {
    pub fn of(module: Option<&Module>, name: &str) -> Self {
        match module.and_then(|module| module.local_export(name)) {
            Some(entry) => ExportStatus { is_exported: true, is_default: entry.is_default() },
            None => ExportStatus::default(),
        }
    }
}
