use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::scan::should_include_file;
use crate::types::ModuleSource;

/// Derive a module name from a source path: directory and `.py` extension
/// stripped.
pub fn module_name_for(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}

/// Discover the package's module sources: every included `*.py` file at
/// the top level of `dir`, sorted by module name for reproducible scans.
pub fn scan_directory(dir: &Path, excluded: &[String]) -> Result<Vec<ModuleSource>> {
    let mut modules = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !should_include_file(path, excluded) {
            continue;
        }
        let name = match module_name_for(path) {
            Some(name) => name,
            None => continue,
        };
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        modules.push(ModuleSource::new(name, path, text));
    }

    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_module_name_strips_extension() {
        assert_eq!(
            module_name_for(&PathBuf::from("pkg/analyze.py")),
            Some("analyze".to_string())
        );
    }

    #[test]
    fn test_scan_collects_sorted_modules() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "zeta.py", "x = 1\n");
        write(tmp.path(), "alpha.py", "y = 2\n");
        write(tmp.path(), "notes.txt", "not a module\n");

        let modules = scan_directory(tmp.path(), &[]).unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_scan_skips_excluded_and_nested_files() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "__init__.py", "\n");
        write(tmp.path(), "core.py", "x = 1\n");
        fs::create_dir(tmp.path().join("sub")).unwrap();
        write(&tmp.path().join("sub"), "nested.py", "y = 2\n");

        let excluded = vec!["__init__.py".to_string()];
        let modules = scan_directory(tmp.path(), &excluded).unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["core"]);
    }

    #[test]
    fn test_scan_keeps_module_text() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "mod.py", "__all__ = ['f']\n");

        let modules = scan_directory(tmp.path(), &[]).unwrap();
        assert_eq!(modules[0].text, "__all__ = ['f']\n");
    }
}
