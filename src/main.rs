use clap::Parser;
use console::style;

use initorder::cli::{run_order, Args};

fn main() {
    let args = Args::parse();

    if let Err(err) = run_order(&args) {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}
