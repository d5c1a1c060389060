mod filter;
mod walker;

pub use filter::should_include_file;
pub use walker::{module_name_for, scan_directory};
