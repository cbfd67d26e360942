//! Corpus-level candidate generation on a bounded worker pool.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::{
    data::document::Document,
    nlp::{segment::Segmenter, syntax::SyntaxParser},
    pairs::{pair::DocumentPairs, rules::CandidateGenerator},
};

/// Generate candidates for every document, at most `workers` at a time.
///
/// Each document runs on a blocking thread. Reports come back in input order;
/// a document that fails (or panics) is logged and reported with no pairs.
pub async fn generate_corpus(
    documents: Vec<Document>,
    segmenter: Arc<dyn Segmenter>,
    parser: Arc<dyn SyntaxParser>,
    workers: usize,
) -> Vec<DocumentPairs> {
    let total = documents.len();
    let mut finished = stream::iter(documents.into_iter().enumerate())
        .map(|(idx, doc)| {
            let segmenter = Arc::clone(&segmenter);
            let parser = Arc::clone(&parser);
            async move {
                let filename = doc.filename.clone();
                let outcome = tokio::task::spawn_blocking(move || {
                    CandidateGenerator::new(parser.as_ref())
                        .generate_document(&doc, segmenter.as_ref())
                })
                .await;
                let pairs = match outcome {
                    Ok(Ok(pairs)) => {
                        info!(file = %filename, pairs = pairs.len(), "generated candidates");
                        pairs
                    }
                    Ok(Err(err)) => {
                        error!(file = %filename, error = %err, "candidate generation failed");
                        Vec::new()
                    }
                    Err(err) => {
                        error!(file = %filename, error = %err, "candidate worker aborted");
                        Vec::new()
                    }
                };
                (idx, DocumentPairs::new(filename, pairs))
            }
        })
        .buffer_unordered(workers.max(1))
        .collect::<Vec<_>>()
        .await;

    finished.sort_by_key(|(idx, _)| *idx);
    let reports: Vec<DocumentPairs> = finished.into_iter().map(|(_, report)| report).collect();
    let pairs: usize = reports.iter().map(|r| r.pairs.len()).sum();
    info!(
        reports = total,
        pairs,
        mean = pairs as f64 / total.max(1) as f64,
        "built candidate pairs"
    );
    reports
}
