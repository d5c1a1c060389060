use serde::Serialize;
use std::path::PathBuf;

/// One orderable module of the scanned package.
///
/// The name is the source filename with its directory and `.py` extension
/// stripped; the text is the full module body handed to the extractors.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSource {
    /// Module name, e.g. `analyze` for `analyze.py`
    pub name: String,
    /// Path to the source file as discovered
    pub path: PathBuf,
    /// Full source text
    #[serde(skip)]
    pub text: String,
}

impl ModuleSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            text: text.into(),
        }
    }
}
