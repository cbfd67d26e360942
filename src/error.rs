//! Error types for pair generation and the syntax adapters.

use thiserror::Error;

/// Failures raised while building gold or candidate pairs for one document.
///
/// Every variant is scoped to a single document: the corpus runner logs it
/// with the document's filename and carries on with the rest of the corpus.
#[derive(Debug, Error)]
pub enum PairingError {
    /// A temporal link names an event that is not in the event index.
    #[error("link `{link}` references unknown event `{event}`")]
    LookupFailure { link: String, event: String },

    /// The syntax adapter split text that must be parsed as one sentence.
    #[error("parser split `{text}` into {count} sentences, expected one")]
    ParseAssumptionViolated { text: String, count: usize },

    /// The syntax adapter itself failed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Failures reported by a [`SyntaxParser`](crate::nlp::syntax::SyntaxParser).
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// No pre-computed parse exists for the requested text.
    #[error("no parse available for `{0}`")]
    MissingParse(String),

    /// The parser server could not be reached.
    #[error("parser request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The parser answered with something that is not a parse.
    #[error("unreadable parser response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The parser answered with an error status.
    #[error("parser server returned {status}: {body}")]
    Server { status: u16, body: String },
}

impl PairingError {
    pub fn lookup(link: impl Into<String>, event: impl Into<String>) -> Self {
        Self::LookupFailure {
            link: link.into(),
            event: event.into(),
        }
    }
}
