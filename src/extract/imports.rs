//! Requirement extraction: the second recognized statement shape.
//!
//! A module states its in-package requirements with a single import from
//! the enclosing package itself:
//!
//! ```python
//! from miles import (TransitionKernel,
//!                    save_distributions)
//! ```
//!
//! Only the first well-formed match per module is honored; a module is
//! expected to carry one canonical in-package import at the top, and any
//! later ones are ignored. Imports from submodules
//! (`from miles.core import x`) or other packages never match.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::types::ModuleSource;

/// Module name -> symbol names it imports from the package. A module with
/// no in-package import statement is absent from the map.
pub type RequirementMap = BTreeMap<String, Vec<String>>;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Scanner for `from <package> import ...` statements. The pattern depends
/// on the package name, so it is built per run rather than as a static.
pub struct ImportScanner {
    pattern: Regex,
}

impl ImportScanner {
    pub fn new(package: &str) -> Self {
        let pkg = regex::escape(package);
        // Two alternatives: a parenthesized (possibly multi-line) name list,
        // or a bare single-line one.
        let pattern = Regex::new(&format!(
            r"(?m)^from[ \t]+{pkg}[ \t]+import[ \t]+(?:\(([^)]*)\)|([^\r\n]+))"
        ))
        .expect("import pattern");
        Self { pattern }
    }

    /// Extract the module's requirement list: the names of the first
    /// well-formed in-package import statement, or `None` when the module
    /// has no such statement.
    pub fn extract(&self, text: &str) -> Option<Vec<String>> {
        for cap in self.pattern.captures_iter(text) {
            let body = cap.get(1).or_else(|| cap.get(2))?.as_str();
            if let Some(names) = parse_name_list(body) {
                return Some(names);
            }
            // A malformed candidate (star import, alias, dotted name) is
            // treated as not present; keep scanning.
        }
        None
    }
}

/// Parse a comma-separated name list. `None` when any item is not a bare
/// identifier.
fn parse_name_list(body: &str) -> Option<Vec<String>> {
    let mut names = Vec::new();
    for item in body.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if !IDENTIFIER.is_match(item) {
            return None;
        }
        names.push(item.to_string());
    }
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Run the scanner over every module and collect the Requirement Map.
pub fn build_requirement_map(modules: &[ModuleSource], scanner: &ImportScanner) -> RequirementMap {
    let mut requirements = RequirementMap::new();
    for module in modules {
        if let Some(names) = scanner.extract(&module.text) {
            requirements.insert(module.name.clone(), names);
        }
    }
    requirements
}
