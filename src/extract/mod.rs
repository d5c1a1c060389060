mod exports;
mod imports;

pub use exports::extract_exports;
pub use imports::{build_requirement_map, ImportScanner, RequirementMap};
