// Items such as GenerateConfig::new are library API exercised by tests only
#![allow(dead_code)]

mod cmd;
mod config;
mod generate;
mod input;
mod logging;
mod progress;
mod warehouse;
mod writer;

use clap::Parser;
use cmd::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = cmd::run(cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
