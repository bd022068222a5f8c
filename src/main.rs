//! pem-chain-order - reorder the certificates in a PEM chain
//!
//! Arranges the certificates of a bundle leaf first using the PKCS#12
//! bag attributes in the file, without touching the PEM payload.

use clap::Parser;
use console::style;
use pem_chain_order::cli::Cli;
use pem_chain_order::commands;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = commands::run_order(&cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
