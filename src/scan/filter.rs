use std::path::Path;

/// Decide whether a file is an orderable module source.
///
/// Accepts non-hidden `*.py` files whose filename is not on the exclusion
/// list (package initializers, by default).
pub fn should_include_file(path: &Path, excluded: &[String]) -> bool {
    let filename = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };

    if filename.starts_with('.') {
        return false;
    }

    if path.extension().and_then(|e| e.to_str()) != Some("py") {
        return false;
    }

    !excluded.iter().any(|e| e == filename)
}
