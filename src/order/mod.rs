mod graph;
mod resolve;
mod symbols;

pub use graph::{order_modules, DependencyGraph};
pub use resolve::{resolve, DependencyMap};
pub use symbols::{build_symbol_table, DuplicateSymbol, SymbolTable, VERSION_SYMBOL};
