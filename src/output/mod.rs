//! Output formatting module
//!
//! Narration helpers for the terminal plus the machine-readable JSON
//! summary used by `--dry-run --format json`.

use crate::chain::{CertificateRecord, Relocation};
use crate::error::Result;
use console::style;
use serde::Serialize;

/// Print a separator rule around dumped bundle content
pub fn print_rule() {
    println!("{}", style("------------------------------------------").dim());
}

/// Dump the resulting bundle content between separator rules
pub fn print_chain_dump(lines: &[String]) {
    println!();
    println!("Resulting file content:");
    print_rule();
    for line in lines {
        println!("{}", line);
    }
    print_rule();
}

/// JSON-serializable summary of a reordering run
#[derive(Serialize)]
pub struct ChainSummary {
    pub input: String,
    pub certificates: Vec<CertificateEntry>,
    pub relocations: Vec<Relocation>,
}

/// One certificate in the final order
#[derive(Serialize)]
pub struct CertificateEntry {
    pub subject: String,
    pub issuer: String,
}

impl ChainSummary {
    /// Build a summary from the final record order and relocation journal
    pub fn new(input: &str, records: &[CertificateRecord], relocations: &[Relocation]) -> Self {
        ChainSummary {
            input: input.to_string(),
            certificates: records
                .iter()
                .map(|r| CertificateEntry {
                    subject: r.subject.clone(),
                    issuer: r.issuer.clone(),
                })
                .collect(),
            relocations: relocations.to_vec(),
        }
    }
}

/// Print a summary as pretty JSON to stdout
pub fn print_json(summary: &ChainSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
