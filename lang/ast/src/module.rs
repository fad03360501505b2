/// Import name marking a namespace import, `import * as ns from 'm'`
pub const STAR_NAME: &str = "*";
/// Export name of the default export
pub const DEFAULT_NAME: &str = "default";
/// Binding name the parser invents for `export default <expression>`
pub const DEFAULT_EXPORT_BINDING_NAME: &str = "*default*";

/// Module metadata which the parser attaches to the program instead of
/// emitting import and export statements as tree nodes.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub imports: Vec<ImportEntry>,
    pub local_exports: Vec<ExportEntry>,
    pub star_exports: Vec<ExportEntry>,
}

impl Module {
    /// Find the local export entry for a binding name.
    pub fn local_export(&self, local_name: &str) -> Option<&ExportEntry> {
        self.local_exports.iter().find(|entry| entry.local_name.as_deref() == Some(local_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    /// The module specifier without quotes
    pub module_request: String,
    /// The imported name, [`STAR_NAME`] for namespace imports and
    /// [`DEFAULT_NAME`] for default imports
    pub import_name: String,
    /// The local binding
    pub local_name: Option<String>,
}

impl ImportEntry {
    pub fn is_namespace(&self) -> bool {
        self.import_name == STAR_NAME
    }

    pub fn is_default(&self) -> bool {
        self.import_name == DEFAULT_NAME
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub export_name: Option<String>,
    pub local_name: Option<String>,
    /// The module specifier of a re-export, without quotes
    pub module_request: Option<String>,
}

impl ExportEntry {
    pub fn is_default(&self) -> bool {
        self.export_name.as_deref() == Some(DEFAULT_NAME)
    }
}
