//! Certificate chain parsing, ordering, and serialization
//!
//! The pipeline is a straight line: bundle text is split into records,
//! records are annotated with subject/issuer bag attributes, the orderer
//! arranges them leaf first, and the writer flattens them back to text.

pub mod order;
pub mod parser;
pub mod record;
pub mod writer;

pub use order::{order_chain, Relocation};
pub use parser::parse_chain;
pub use record::{CertificateRecord, BEGIN_MARKER, END_MARKER};
pub use writer::{flatten_chain, write_chain};
