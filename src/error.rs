use thiserror::Error;

/// Fatal ordering failures.
///
/// Malformed export or import declarations are not errors: the extractors
/// skip anything outside the two recognized statement shapes, and the
/// symbol or requirement is simply never recorded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// A required symbol has no registered provider. Reports the offending
    /// module together with its full requirement set, since a missing
    /// provider usually means the whole module was scanned incorrectly.
    #[error(
        "module `{module}` requires symbol `{symbol}` which no module provides \
         (full requirement set: {symbols:?})"
    )]
    UnresolvedSymbol {
        module: String,
        symbol: String,
        symbols: Vec<String>,
    },

    /// The dependency graph is not a DAG. No valid total order exists, so
    /// the run aborts naming the participating modules.
    #[error("dependency cycle between modules: {}", modules.join(" -> "))]
    DependencyCycle { modules: Vec<String> },
}
