use std::env;

use defense_indicators::{cli, logging};

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("failed to initialize logging: {err}");
    }
    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run_with_args(&args));
}
