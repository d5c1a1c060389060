//! Export-list extraction: the first of the two statement shapes the
//! scanner recognizes.
//!
//! Only the literal form is honored:
//!
//! ```python
//! __all__ = ['foo', "bar",
//!            'baz']          # list or tuple, possibly multi-line
//! ```
//!
//! A declaration whose body is anything other than a flat sequence of
//! string literals (a comprehension, a name, concatenation) is treated as
//! not present: its symbols are never registered, and any module that
//! requires one of them fails resolution later.

use once_cell::sync::Lazy;
use regex::Regex;

/// First `__all__ = [...]` or `__all__ = (...)` statement at column zero.
/// The closing bracket must end its line, so trailing expressions such as
/// `__all__ = ['a'] + extra` do not pass as literal lists.
static ALL_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^__all__\s*=\s*[\[(](.*?)[\])][ \t]*(?:#[^\n]*)?$").unwrap());

/// A single bracketed element: one quoted string literal, nothing else.
static STRING_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:'([^'\\]*)'|"([^"\\]*)")$"#).unwrap());

/// Extract the module's declared export list.
///
/// Returns the symbol names in declaration order, or an empty vector when
/// the module has no export declaration or the declaration is malformed.
pub fn extract_exports(text: &str) -> Vec<String> {
    let body = match ALL_DECL.captures(text).and_then(|cap| cap.get(1)) {
        Some(m) => m.as_str(),
        None => return Vec::new(),
    };

    match parse_string_items(body) {
        Some(symbols) => symbols,
        None => Vec::new(),
    }
}

/// Parse the bracketed body into string literals. `None` means the body is
/// not a flat list of string literals and the whole declaration is skipped.
fn parse_string_items(body: &str) -> Option<Vec<String>> {
    let stripped: String = body
        .lines()
        .map(strip_line_comment)
        .collect::<Vec<_>>()
        .join("\n");

    let mut symbols = Vec::new();
    for item in stripped.split(',') {
        let item = item.trim();
        if item.is_empty() {
            // Trailing comma or blank continuation line
            continue;
        }
        let cap = STRING_LITERAL.captures(item)?;
        let name = cap.get(1).or_else(|| cap.get(2))?.as_str();
        symbols.push(name.to_string());
    }
    Some(symbols)
}

/// Drop a trailing `#` comment. A `#` preceded by an odd number of quotes
/// sits inside a string literal and is kept.
fn strip_line_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => {
            let quotes = line[..pos].matches(['\'', '"']).count();
            if quotes % 2 == 0 {
                &line[..pos]
            } else {
                line
            }
        }
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_list() {
        let text = "__all__ = ['analyze', 'prepare']\n";
        assert_eq!(extract_exports(text), vec!["analyze", "prepare"]);
    }

    #[test]
    fn test_tuple_form() {
        let text = "__all__ = (\"TransitionKernel\", \"save_distributions\")\n";
        assert_eq!(
            extract_exports(text),
            vec!["TransitionKernel", "save_distributions"]
        );
    }

    #[test]
    fn test_multi_line_with_trailing_comma() {
        let text = "\"\"\"Docstring.\"\"\"\n\n__all__ = [\n    'first',\n    'second',\n]\n";
        assert_eq!(extract_exports(text), vec!["first", "second"]);
    }

    #[test]
    fn test_inline_comment_inside_list() {
        let text = "__all__ = [\n    'first',  # the main entry point\n    'second',\n]\n";
        assert_eq!(extract_exports(text), vec!["first", "second"]);
    }

    #[test]
    fn test_no_declaration() {
        assert!(extract_exports("x = 1\n").is_empty());
    }

    #[test]
    fn test_computed_list_is_skipped() {
        let text = "__all__ = [name for name in registry]\n";
        assert!(extract_exports(text).is_empty());
    }

    #[test]
    fn test_name_reference_is_skipped() {
        let text = "__all__ = [PUBLIC_NAME, 'other']\n";
        assert!(extract_exports(text).is_empty());
    }

    #[test]
    fn test_indented_declaration_is_ignored() {
        // Only a top-level statement counts as the module's export list.
        let text = "def f():\n    __all__ = ['hidden']\n";
        assert!(extract_exports(text).is_empty());
    }

    #[test]
    fn test_concatenation_is_skipped() {
        let text = "__all__ = ['a'] + extra\n";
        assert!(extract_exports(text).is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert!(extract_exports("__all__ = []\n").is_empty());
    }
}
