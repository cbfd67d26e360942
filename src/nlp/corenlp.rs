//! Syntax adapter backed by a CoreNLP-compatible HTTP server.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Handle;
use tracing::debug;
use urlencoding::encode;

use crate::{
    error::SyntaxError,
    nlp::syntax::{ParsedSentence, SyntaxParser, Word},
};

/// Text arrives already segmented: each request is parsed as one sentence.
const PROPERTIES: &str = r#"{"annotators":"tokenize,ssplit,pos,depparse","tokenize.whitespace":"true","ssplit.isOneSentence":"true","outputFormat":"json"}"#;

/// Client for `POST {url}/?properties=...` on a CoreNLP or Stanza server.
///
/// [`SyntaxParser::parse`] blocks on the runtime captured at construction, so
/// it must be called from a blocking thread (`spawn_blocking`), never from an
/// async task.
pub struct CoreNlpClient {
    url: String,
    client: Client,
    runtime: Handle,
}

impl CoreNlpClient {
    /// Build a client; must be called inside a tokio runtime.
    pub fn new(url: impl Into<String>) -> Result<Self, SyntaxError> {
        let client = Client::builder()
            .user_agent("tlink-pairs/0.1")
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            url: url.into().trim_end_matches('/').to_string(),
            client,
            runtime: Handle::current(),
        })
    }

    /// Annotation endpoint with the request properties encoded in the query.
    pub fn annotate_url(&self) -> String {
        format!("{}/?properties={}", self.url, encode(PROPERTIES))
    }

    async fn request(&self, text: &str) -> Result<Vec<ParsedSentence>, SyntaxError> {
        let resp = self
            .client
            .post(self.annotate_url())
            .body(text.to_string())
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SyntaxError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let sentences = parse_response(&body)?;
        debug!(chars = text.len(), sentences = sentences.len(), "parsed with corenlp");
        Ok(sentences)
    }
}

impl SyntaxParser for CoreNlpClient {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>, SyntaxError> {
        self.runtime.block_on(self.request(text))
    }
}

/// Convert a CoreNLP JSON document into parsed sentences.
pub fn parse_response(body: &str) -> Result<Vec<ParsedSentence>, SyntaxError> {
    let doc: CoreNlpDocument = serde_json::from_str(body)?;
    Ok(doc.sentences.into_iter().map(CoreNlpSentence::into_parsed).collect())
}

/// Map a Penn Treebank tag onto the universal tag the head-noun rule needs.
fn universal_pos(penn: &str) -> &'static str {
    match penn {
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "PRP" | "PRP$" | "WP" | "WP$" => "PRON",
        "DT" | "PDT" | "WDT" => "DET",
        "IN" => "ADP",
        "CC" => "CCONJ",
        "CD" => "NUM",
        "MD" => "AUX",
        tag if tag.starts_with("VB") => "VERB",
        tag if tag.starts_with("JJ") => "ADJ",
        tag if tag.starts_with("RB") || tag == "WRB" => "ADV",
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" => "PUNCT",
        _ => "X",
    }
}

#[derive(Debug, Deserialize)]
struct CoreNlpDocument {
    #[serde(default)]
    sentences: Vec<CoreNlpSentence>,
}

#[derive(Debug, Deserialize)]
struct CoreNlpSentence {
    #[serde(default)]
    tokens: Vec<CoreNlpToken>,
    #[serde(rename = "basicDependencies", default)]
    dependencies: Vec<CoreNlpDependency>,
}

#[derive(Debug, Deserialize)]
struct CoreNlpToken {
    word: String,
    #[serde(default)]
    pos: String,
}

#[derive(Debug, Deserialize)]
struct CoreNlpDependency {
    dep: String,
    governor: usize,
    dependent: usize,
}

impl CoreNlpSentence {
    fn into_parsed(self) -> ParsedSentence {
        let mut words: Vec<Word> = self
            .tokens
            .into_iter()
            .map(|t| Word::new(t.word, universal_pos(&t.pos), "", 0))
            .collect();
        for dep in self.dependencies {
            let Some(word) = dep.dependent.checked_sub(1).and_then(|i| words.get_mut(i)) else {
                continue;
            };
            word.head = dep.governor;
            word.deprel = dep.dep.to_lowercase();
        }
        ParsedSentence::new(words)
    }
}
