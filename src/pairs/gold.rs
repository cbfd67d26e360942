//! Gold pairs derived from annotated temporal links.

use tracing::{error, info};

use crate::{
    data::document::Document,
    error::PairingError,
    pairs::pair::{DocumentPairs, Pair},
};

/// One pair per temporal link, in link order, carrying the link id.
pub fn gold_pairs(doc: &Document) -> Result<Vec<Pair>, PairingError> {
    doc.links
        .iter()
        .map(|link| {
            let head = doc
                .events
                .resolve(&link.from_id)
                .ok_or_else(|| PairingError::lookup(&link.id, &link.from_id))?;
            let tail = doc
                .events
                .resolve(&link.to_id)
                .ok_or_else(|| PairingError::lookup(&link.id, &link.to_id))?;
            Ok(Pair::between(head, tail).with_link(&link.id))
        })
        .collect()
}

/// Gold pairs for a corpus. A document whose links cannot be resolved is
/// logged and reported with no pairs.
pub fn corpus_gold_pairs(documents: &[Document]) -> Vec<DocumentPairs> {
    let reports: Vec<DocumentPairs> = documents
        .iter()
        .map(|doc| match gold_pairs(doc) {
            Ok(pairs) => DocumentPairs::new(&doc.filename, pairs),
            Err(err) => {
                error!(file = %doc.filename, error = %err, "gold pairs failed");
                DocumentPairs::new(&doc.filename, Vec::new())
            }
        })
        .collect();
    let total: usize = reports.iter().map(|r| r.pairs.len()).sum();
    info!(
        reports = reports.len(),
        pairs = total,
        mean = total as f64 / reports.len().max(1) as f64,
        "built gold pairs"
    );
    reports
}
