mod args;
mod order;

pub use args::{Args, OutputFormat};
pub use order::run_order;
