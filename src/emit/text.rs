//! Text rendering: the generated initializer body written to stdout.

/// Banner prepended to the generated import block.
pub const BANNER: &str = "# This file was generated by initorder. Do not edit by hand.";

/// Render one wildcard import per module, in load order, prefixed by the
/// generated-file banner.
pub fn render_imports(package: &str, order: &[String]) -> String {
    let mut output = String::new();
    output.push_str(BANNER);
    output.push('\n');

    for module in order {
        output.push_str(&format!("from {package}.{module} import *\n"));
    }

    output
}
