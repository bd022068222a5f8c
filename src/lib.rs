//! PEM chain ordering library
//!
//! Reorders the certificates of a PEM bundle so that every certificate
//! precedes the certificate that issued it (leaf first, intermediates
//! next, root last). The order is determined from the `subject=` and
//! `issuer=` bag-attribute lines OpenSSL emits when a bundle is exported
//! from a PKCS#12/pfx file; the PEM payload itself is never parsed.
//!
//! # Usage
//!
//! ```rust
//! use pem_chain_order::chain::{flatten_chain, order_chain, parse_chain};
//!
//! let bundle = "\
//! subject=CN = root
//! issuer=CN = root
//! -----BEGIN CERTIFICATE-----
//! MIIBroot
//! -----END CERTIFICATE-----
//! subject=CN = leaf
//! issuer=CN = root
//! -----BEGIN CERTIFICATE-----
//! MIIBleaf
//! -----END CERTIFICATE-----
//! ";
//!
//! let mut records = parse_chain(bundle, false).unwrap();
//! order_chain(&mut records);
//! assert_eq!(records[0].subject, "CN = leaf");
//! let lines = flatten_chain(&records);
//! assert_eq!(lines.first().map(String::as_str), Some("subject=CN = leaf"));
//! ```

pub mod chain;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use chain::{order_chain, parse_chain, CertificateRecord, Relocation};
pub use cli::{Cli, OutputFormat};
pub use error::{ChainError, Result};
