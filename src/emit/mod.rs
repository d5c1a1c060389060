mod json;
mod text;

pub use json::{JsonOutput, ModuleReport};
pub use text::{render_imports, BANNER};
