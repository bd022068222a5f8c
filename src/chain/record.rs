//! Certificate record model and bag-attribute metadata extraction

/// Exact PEM begin marker; anything else (including extra whitespace) is preamble or payload.
pub const BEGIN_MARKER: &str = "-----BEGIN CERTIFICATE-----";
/// Exact PEM end marker.
pub const END_MARKER: &str = "-----END CERTIFICATE-----";

const SUBJECT_PREFIX: &str = "subject=";
const ISSUER_PREFIX: &str = "issuer=";

/// A single certificate entry in a PEM bundle: the bag-attribute preamble
/// lines plus the delimited body, kept verbatim.
///
/// Records are sealed once their end marker is seen and never edited
/// afterwards; the orderer only changes their position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    /// Lines preceding the begin marker, in original order.
    pub preamble: Vec<String>,
    /// Lines from the begin marker through the end marker, inclusive.
    pub body: Vec<String>,
    /// Value of the first `subject=` preamble line, prefix stripped; empty if absent.
    pub subject: String,
    /// Value of the first `issuer=` preamble line, prefix stripped; empty if absent.
    pub issuer: String,
}

impl CertificateRecord {
    pub(crate) fn new() -> Self {
        CertificateRecord {
            preamble: Vec::new(),
            body: Vec::new(),
            subject: String::new(),
            issuer: String::new(),
        }
    }

    /// Derive `subject` and `issuer` from the preamble. Called once, when the
    /// record's end marker is reached; the first matching line wins and no
    /// further trimming is applied to the value.
    pub(crate) fn seal(&mut self) {
        if let Some(line) = self
            .preamble
            .iter()
            .find(|l| l.starts_with(SUBJECT_PREFIX))
        {
            self.subject = line[SUBJECT_PREFIX.len()..].to_string();
        }
        if let Some(line) = self.preamble.iter().find(|l| l.starts_with(ISSUER_PREFIX)) {
            self.issuer = line[ISSUER_PREFIX.len()..].to_string();
        }
    }

    /// All lines of the record in output order: preamble first, then body.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.preamble
            .iter()
            .chain(self.body.iter())
            .map(String::as_str)
    }
}
