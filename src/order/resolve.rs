//! Dependency resolution: join each module's requirements against the
//! symbol table to find which sibling modules it depends on.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::OrderError;
use crate::extract::RequirementMap;
use crate::order::symbols::SymbolTable;

/// Module name -> the set of modules providing its required symbols.
pub type DependencyMap = BTreeMap<String, BTreeSet<String>>;

/// Resolve every requirement to its providing module.
///
/// Fails fast on the first symbol with no provider: a missing provider
/// means either a scan bug or a genuinely broken package, and a partial
/// map would be misleading.
pub fn resolve(
    requirements: &RequirementMap,
    providers: &SymbolTable,
) -> Result<DependencyMap, OrderError> {
    let mut dependencies = DependencyMap::new();

    for (module, symbols) in requirements {
        let mut providing = BTreeSet::new();
        for symbol in symbols {
            match providers.get(symbol) {
                Some(provider) => {
                    providing.insert(provider.clone());
                }
                None => {
                    return Err(OrderError::UnresolvedSymbol {
                        module: module.clone(),
                        symbol: symbol.clone(),
                        symbols: symbols.clone(),
                    });
                }
            }
        }
        dependencies.insert(module.clone(), providing);
    }

    Ok(dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> SymbolTable {
        entries
            .iter()
            .map(|(s, m)| (s.to_string(), m.to_string()))
            .collect()
    }

    fn requirements(entries: &[(&str, &[&str])]) -> RequirementMap {
        entries
            .iter()
            .map(|(m, syms)| {
                (
                    m.to_string(),
                    syms.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_resolves_to_providing_modules() {
        let providers = table(&[("X", "a"), ("Y", "a"), ("Z", "b")]);
        let reqs = requirements(&[("c", &["X", "Z"]), ("d", &["Y"])]);

        let deps = resolve(&reqs, &providers).unwrap();
        let c: Vec<&str> = deps["c"].iter().map(String::as_str).collect();
        assert_eq!(c, vec!["a", "b"]);
        let d: Vec<&str> = deps["d"].iter().map(String::as_str).collect();
        assert_eq!(d, vec!["a"]);
    }

    #[test]
    fn test_two_symbols_one_provider_collapse() {
        let providers = table(&[("X", "a"), ("Y", "a")]);
        let reqs = requirements(&[("b", &["X", "Y"])]);

        let deps = resolve(&reqs, &providers).unwrap();
        assert_eq!(deps["b"].len(), 1);
    }

    #[test]
    fn test_unresolved_symbol_names_module_and_full_set() {
        let providers = table(&[("X", "a")]);
        let reqs = requirements(&[("b", &["X", "Missing"])]);

        let err = resolve(&reqs, &providers).unwrap_err();
        assert_eq!(
            err,
            OrderError::UnresolvedSymbol {
                module: "b".to_string(),
                symbol: "Missing".to_string(),
                symbols: vec!["X".to_string(), "Missing".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_requirements_resolve_to_empty_map() {
        let deps = resolve(&RequirementMap::new(), &SymbolTable::new()).unwrap();
        assert!(deps.is_empty());
    }
}
