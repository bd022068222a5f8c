//! Issuer-order arrangement of a certificate chain
//!
//! Bundles exported from PKCS#12 files are usually already ordered or
//! trivially inverted, so a single forward scan with local relocation is
//! enough; no general topological sort is needed, and already-correct
//! chains pass through untouched.

use crate::chain::record::CertificateRecord;
use serde::Serialize;

/// One relocation performed by [`order_chain`]: the issuer certificate
/// `moved` was placed directly after `anchor`.
#[derive(Debug, Clone, Serialize)]
pub struct Relocation {
    pub moved: String,
    pub anchor: String,
    pub from: usize,
    pub to: usize,
}

/// Rearrange `records` in place so that every certificate precedes its
/// issuer, returning the relocations performed (empty for an already
/// ordered chain).
///
/// For each record the first record whose subject equals its issuer is
/// looked up in the current sequence; if that issuer currently sits
/// *before* the record, it is moved to the slot directly after it. The
/// scan index does not advance after a move, so the relocated issuer is
/// examined next and multi-hop chains (leaf, intermediate, root) resolve
/// in one pass. Records without metadata, records whose issuer is not in
/// the bundle, and self-signed records at their own index all stay put.
pub fn order_chain(records: &mut Vec<CertificateRecord>) -> Vec<Relocation> {
    let mut journal = Vec::new();
    let mut i = 0;

    while i < records.len() {
        let wanted = records[i].issuer.clone();
        if wanted.is_empty() {
            i += 1;
            continue;
        }

        // First-match lookup over the current sequence state; duplicate
        // subjects beyond the first are never issuer candidates.
        let found = records
            .iter()
            .position(|candidate| candidate.subject == wanted);

        match found {
            Some(j) if j < i => {
                let issuer = records.remove(j);
                // removal shifted the current record down to i - 1
                journal.push(Relocation {
                    moved: issuer.subject.clone(),
                    anchor: records[i - 1].subject.clone(),
                    from: j,
                    to: i,
                });
                tracing::debug!(
                    moved = %issuer.subject,
                    anchor = %records[i - 1].subject,
                    "relocated issuer certificate"
                );
                records.insert(i, issuer);
                // re-examine index i: it now holds the relocated issuer
            }
            _ => i += 1,
        }
    }

    journal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str, issuer: &str) -> CertificateRecord {
        CertificateRecord {
            preamble: vec![format!("subject={subject}"), format!("issuer={issuer}")],
            body: vec![
                "-----BEGIN CERTIFICATE-----".to_string(),
                format!("payload-{subject}"),
                "-----END CERTIFICATE-----".to_string(),
            ],
            subject: subject.to_string(),
            issuer: issuer.to_string(),
        }
    }

    fn subjects(records: &[CertificateRecord]) -> Vec<&str> {
        records.iter().map(|r| r.subject.as_str()).collect()
    }

    #[test]
    fn test_root_first_bundle_is_inverted() {
        let mut records = vec![record("R", "R"), record("L", "I"), record("I", "R")];
        let journal = order_chain(&mut records);
        assert_eq!(subjects(&records), ["L", "I", "R"]);
        assert_eq!(journal.len(), 1);
        assert_eq!(journal[0].moved, "R");
        assert_eq!(journal[0].anchor, "I");
        assert_eq!(journal[0].from, 0);
        assert_eq!(journal[0].to, 2);
    }

    #[test]
    fn test_multi_hop_chain_resolves_transitively() {
        // moving the intermediate next to the leaf must immediately pull
        // the root along without a second outer pass
        let mut records = vec![record("I", "R"), record("R", "R"), record("L", "I")];
        let journal = order_chain(&mut records);
        assert_eq!(subjects(&records), ["L", "I", "R"]);
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].moved, "I");
        assert_eq!(journal[0].anchor, "L");
        assert_eq!(journal[1].moved, "R");
        assert_eq!(journal[1].anchor, "I");
    }

    #[test]
    fn test_ordered_chain_is_untouched() {
        let mut records = vec![record("L", "I"), record("I", "R"), record("R", "R")];
        let before = records.clone();
        let journal = order_chain(&mut records);
        assert!(journal.is_empty());
        assert_eq!(records, before);
    }

    #[test]
    fn test_self_signed_never_self_relocates() {
        let mut records = vec![record("R", "R")];
        assert!(order_chain(&mut records).is_empty());
        assert_eq!(subjects(&records), ["R"]);
    }

    #[test]
    fn test_unknown_issuer_stays_in_place() {
        let mut records = vec![record("A", "Elsewhere"), record("B", "A")];
        assert!(order_chain(&mut records).is_empty());
        assert_eq!(subjects(&records), ["A", "B"]);
    }

    #[test]
    fn test_duplicate_subjects_first_match_wins() {
        // two records claim subject I; only the first may be relocated
        let mut records = vec![
            record("I", "R"),
            record("I", "R"),
            record("L", "I"),
            record("R", "R"),
        ];
        let journal = order_chain(&mut records);
        assert_eq!(subjects(&records), ["I", "L", "I", "R"]);
        assert_eq!(journal.len(), 1);
        assert_eq!(journal[0].moved, "I");
        assert_eq!(journal[0].anchor, "L");
    }

    #[test]
    fn test_no_metadata_records_pass_through() {
        let mut records = vec![
            CertificateRecord {
                preamble: vec![],
                body: vec!["-----BEGIN CERTIFICATE-----".into(), "-----END CERTIFICATE-----".into()],
                subject: String::new(),
                issuer: String::new(),
            },
            record("L", "I"),
            record("I", "I"),
        ];
        assert!(order_chain(&mut records).is_empty());
        assert_eq!(records.len(), 3);
        assert!(records[0].subject.is_empty());
    }

    #[test]
    fn test_content_preserved_across_relocation() {
        let mut records = vec![record("R", "R"), record("L", "I"), record("I", "R")];
        let mut before = records.clone();
        order_chain(&mut records);
        before.sort_by(|a, b| a.subject.cmp(&b.subject));
        let mut after = records.clone();
        after.sort_by(|a, b| a.subject.cmp(&b.subject));
        assert_eq!(before, after);
    }
}
