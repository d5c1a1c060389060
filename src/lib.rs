pub mod cli;
pub mod emit;
pub mod error;
pub mod extract;
pub mod order;
pub mod scan;
pub mod types;

pub use error::OrderError;
