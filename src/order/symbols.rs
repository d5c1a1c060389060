//! Symbol table construction: which module owns each exported symbol.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::extract::extract_exports;
use crate::types::ModuleSource;

/// Symbol name -> owning module name. At most one owner per symbol.
pub type SymbolTable = BTreeMap<String, String>;

/// The package version marker is always available, owned by a module of
/// the same name, whether or not that module declares an export list.
pub const VERSION_SYMBOL: &str = "version";

/// A symbol claimed by more than one module. The later-scanned module kept
/// ownership; the earlier one was shadowed. Surfaced as a warning, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateSymbol {
    pub symbol: String,
    pub kept: String,
    pub shadowed: String,
}

/// Scan every module's export declaration and build the symbol table,
/// seeded with the version marker.
///
/// Modules are scanned in the order given; when two modules export the
/// same symbol the later one wins and the overwrite is recorded.
pub fn build_symbol_table(modules: &[ModuleSource]) -> (SymbolTable, Vec<DuplicateSymbol>) {
    let mut table = SymbolTable::new();
    let mut duplicates = Vec::new();

    table.insert(VERSION_SYMBOL.to_string(), VERSION_SYMBOL.to_string());

    for module in modules {
        for symbol in extract_exports(&module.text) {
            if let Some(previous) = table.insert(symbol.clone(), module.name.clone()) {
                if previous != module.name {
                    duplicates.push(DuplicateSymbol {
                        symbol,
                        kept: module.name.clone(),
                        shadowed: previous,
                    });
                }
            }
        }
    }

    (table, duplicates)
}
