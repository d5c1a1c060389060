use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute a dependency-respecting import order for a Python package
/// initializer.
#[derive(Debug, Parser)]
#[command(name = "initorder", version, about)]
pub struct Args {
    /// Directory containing the package's module sources
    pub dir: PathBuf,

    /// Package name used to match in-package imports; defaults to the
    /// directory's basename
    #[arg(long)]
    pub package: Option<String>,

    /// Filename never treated as an orderable module (repeatable)
    #[arg(long, default_value = "__init__.py")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Generated-file banner plus one import statement per module
    Text,
    /// Machine-readable report with order, symbols, and warnings
    Json,
}
