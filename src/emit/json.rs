use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::extract::RequirementMap;
use crate::order::{DuplicateSymbol, SymbolTable};
use crate::types::ModuleSource;

/// Machine-readable report for `--format json`.
#[derive(Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub package: String,
    pub order: Vec<String>,
    pub modules: Vec<ModuleReport>,
    pub warnings: Vec<DuplicateSymbol>,
}

#[derive(Serialize)]
pub struct ModuleReport {
    pub name: String,
    pub provides: Vec<String>,
    pub requires: Vec<String>,
}

impl ModuleReport {
    pub fn from_module(
        module: &ModuleSource,
        symbols: &SymbolTable,
        requirements: &RequirementMap,
    ) -> Self {
        let provides = symbols
            .iter()
            .filter(|(_, owner)| *owner == &module.name)
            .map(|(symbol, _)| symbol.clone())
            .collect();
        let requires = requirements.get(&module.name).cloned().unwrap_or_default();

        Self {
            name: module.name.clone(),
            provides,
            requires,
        }
    }
}

impl JsonOutput {
    pub fn new(
        package: &str,
        order: &[String],
        modules: &[ModuleSource],
        symbols: &SymbolTable,
        requirements: &RequirementMap,
        warnings: &[DuplicateSymbol],
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            package: package.to_string(),
            order: order.to_vec(),
            modules: modules
                .iter()
                .map(|m| ModuleReport::from_module(m, symbols, requirements))
                .collect(),
            warnings: warnings.to_vec(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
