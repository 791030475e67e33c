//! Storequote - storage rental quote calculator
//!
//! A CLI tool that prices storage quote wizard submissions and renders
//! the quote for download, WhatsApp and email.

mod cli;
mod commands;
mod logger;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
