use anyhow::{bail, Context, Result};
use console::style;

use crate::cli::{Args, OutputFormat};
use crate::emit::{render_imports, JsonOutput};
use crate::extract::{build_requirement_map, ImportScanner};
use crate::order::{build_symbol_table, order_modules, resolve, DuplicateSymbol};
use crate::scan::scan_directory;

/// Full pipeline: scan -> extract -> resolve -> order -> emit.
pub fn run_order(args: &Args) -> Result<()> {
    let package = match &args.package {
        Some(name) => name.clone(),
        None => package_name_from_dir(args)?,
    };

    let modules = scan_directory(&args.dir, &args.exclude)
        .with_context(|| format!("scanning {}", args.dir.display()))?;

    let (symbols, duplicates) = build_symbol_table(&modules);
    report_duplicates(&duplicates);

    let scanner = ImportScanner::new(&package);
    let requirements = build_requirement_map(&modules, &scanner);
    let dependencies = resolve(&requirements, &symbols)?;

    let names: Vec<String> = modules.iter().map(|m| m.name.clone()).collect();
    let order = order_modules(&names, &dependencies)?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", render_imports(&package, &order));
        }
        OutputFormat::Json => {
            let output =
                JsonOutput::new(&package, &order, &modules, &symbols, &requirements, &duplicates);
            println!("{}", output.to_json());
        }
    }

    Ok(())
}

fn package_name_from_dir(args: &Args) -> Result<String> {
    match args.dir.file_name().and_then(|n| n.to_str()) {
        Some(name) => Ok(name.to_string()),
        None => bail!(
            "cannot derive a package name from {}; pass --package",
            args.dir.display()
        ),
    }
}

fn report_duplicates(duplicates: &[DuplicateSymbol]) {
    for dup in duplicates {
        eprintln!(
            "{} symbol `{}` exported by both `{}` and `{}`; `{}` now owns it",
            style("warning:").yellow().bold(),
            dup.symbol,
            dup.shadowed,
            dup.kept,
            dup.kept,
        );
    }
}
