//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Ensure the correct order of certificates in a PEM chain.

The chain must include bag attributes (added when the PEM was created from
a PKCS#12/pfx file) to determine the certificate order. Certificates are
arranged so that each one precedes the certificate that issued it: leaf
first, intermediates next, root last.";

#[derive(Parser)]
#[command(name = "pem-chain-order")]
#[command(version)]
#[command(about = "Reorder the certificates in a PEM chain", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Input PEM bundle
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dry run - no files would be written
    #[arg(long)]
    pub dry_run: bool,

    /// Fail on an unterminated certificate block instead of dropping it
    #[arg(long)]
    pub strict: bool,

    /// Verbose narration (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// No narration at all
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry-run inspection format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Effective narration level: 0 with --quiet, otherwise 1 plus one per -v.
    /// Narration never changes the computed chain order.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose + 1
        }
    }
}
