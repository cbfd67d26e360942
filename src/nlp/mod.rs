//! Natural language processing adapters: segmentation, parsing, head nouns.

pub mod conllu;
pub mod corenlp;
pub mod head_noun;
pub mod segment;
pub mod syntax;

use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::{cli::ParserKind, config::Settings};

/// Build the syntax adapter selected on the command line.
pub fn build_parser(
    kind: &ParserKind,
    conllu: Option<&std::path::Path>,
    settings: &Settings,
) -> Result<Arc<dyn syntax::SyntaxParser>> {
    match kind {
        ParserKind::Corenlp => Ok(Arc::new(corenlp::CoreNlpClient::new(
            settings.corenlp_url.clone(),
        )?)),
        ParserKind::Conllu => {
            let path = conllu.ok_or_else(|| anyhow!("--conllu is required with --parser conllu"))?;
            Ok(Arc::new(conllu::ConlluParses::from_path(path)?))
        }
    }
}
