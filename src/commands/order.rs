//! Order command implementation
//!
//! Orchestrates the pipeline: read bundle, parse records, arrange them
//! leaf first, then emit the result to a file, stdout, or the dry-run
//! inspection output. Narration depends on the verbosity level only; the
//! computed order never does.

use crate::chain::{flatten_chain, order_chain, parse_chain, write_chain};
use crate::cli::{Cli, OutputFormat};
use crate::error::{ChainError, Result};
use crate::output::{print_chain_dump, print_json, ChainSummary};
use console::style;
use std::fs;

/// Run the reordering pipeline with the given CLI options
pub fn run_order(cli: &Cli) -> Result<()> {
    let verbosity = cli.verbosity();

    if verbosity > 0 {
        println!("Reading from {}", style(cli.input.display()).bold());
    }
    let content =
        fs::read_to_string(&cli.input).map_err(|e| ChainError::InputUnavailable {
            path: cli.input.display().to_string(),
            message: e.to_string(),
        })?;

    if verbosity > 1 {
        println!("  parsing content");
    }
    let mut records = parse_chain(&content, cli.strict)?;
    if verbosity > 1 {
        for record in &records {
            println!(
                "  ++ parsed content of certificate '{}'",
                style(&record.subject).green()
            );
        }
    }

    if verbosity > 1 {
        println!("  arranging certificates");
    }
    let journal = order_chain(&mut records);
    if verbosity > 1 {
        for relocation in &journal {
            println!(
                "  moved certificate '{}' after '{}'",
                style(&relocation.moved).green(),
                style(&relocation.anchor).green()
            );
            if verbosity > 2 {
                println!(
                    "    issuer cert index {} was before {}",
                    relocation.from, relocation.to
                );
            }
        }
    }

    let lines = flatten_chain(&records);

    if cli.dry_run || verbosity > 2 {
        match cli.format {
            OutputFormat::Json => {
                let summary =
                    ChainSummary::new(&cli.input.display().to_string(), &records, &journal);
                print_json(&summary)?;
            }
            OutputFormat::Text => print_chain_dump(&lines),
        }
    }

    if cli.dry_run {
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            if verbosity > 0 {
                println!("Writing result file {}", style(path.display()).bold());
            }
            write_chain(path, &records)
        }
        None => {
            for line in &lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
