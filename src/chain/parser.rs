//! PEM bundle parsing
//!
//! Splits raw bundle text into certificate records. Parsing is line based
//! and deliberately lenient: the body payload is never inspected, and in
//! the default mode a trailing block that was opened but never closed is
//! dropped rather than reported.

use crate::chain::record::{CertificateRecord, BEGIN_MARKER, END_MARKER};
use crate::error::{ChainError, Result};

/// Parser position within the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Collecting metadata lines ahead of the next begin marker.
    InPreamble,
    /// Collecting body lines between begin and end markers.
    InBody,
}

/// Parse bundle text into an ordered sequence of sealed certificate records.
///
/// Lines before the first begin marker become the first record's preamble.
/// With `strict` set, an unterminated trailing body is an error; otherwise
/// it is silently discarded, as is trailing preamble-only text in both modes.
pub fn parse_chain(input: &str, strict: bool) -> Result<Vec<CertificateRecord>> {
    let mut records = Vec::new();
    let mut current = CertificateRecord::new();
    let mut state = ParserState::InPreamble;

    for line in input.lines() {
        match line {
            BEGIN_MARKER => {
                current.body.push(line.to_string());
                state = ParserState::InBody;
            }
            END_MARKER => {
                current.body.push(line.to_string());
                current.seal();
                tracing::debug!(subject = %current.subject, "parsed certificate block");
                records.push(current);
                current = CertificateRecord::new();
                state = ParserState::InPreamble;
            }
            _ => match state {
                ParserState::InPreamble => current.preamble.push(line.to_string()),
                ParserState::InBody => current.body.push(line.to_string()),
            },
        }
    }

    if strict && state == ParserState::InBody {
        return Err(ChainError::UnterminatedBlock {
            lines: current.body.len(),
        });
    }

    Ok(records)
}
