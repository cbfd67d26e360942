//! CLI entry-point for candidate pair generation.

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli::ParserKind,
    config::Settings,
    data,
    nlp::{self, segment::PunctuationSegmenter},
    pairs,
};

/// Args for the `candidates` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Annotation folder; defaults to `DATA_DIR`.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output file name inside `OUTPUTS_DIR`.
    #[arg(long, default_value = "candidate_pairs.xml")]
    pub output: PathBuf,
    /// Syntax adapter for the dependency and head-noun rules.
    #[arg(long, default_value = "corenlp", value_enum)]
    pub parser: ParserKind,
    /// CoNLL-U file with pre-computed parses (`--parser conllu`).
    #[arg(long)]
    pub conllu: Option<PathBuf>,
    /// Override the number of documents processed concurrently.
    #[arg(long)]
    pub workers: Option<usize>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let input = args.input.clone().unwrap_or_else(|| settings.data_dir.clone());
    let workers = args.workers.unwrap_or(settings.workers);
    let parser = nlp::build_parser(&args.parser, args.conllu.as_deref(), &settings)?;
    let documents = data::annotation::load_corpus(&input, &settings.excluded_files)?;

    info!(documents = documents.len(), workers, parser = ?args.parser, "generating candidates");
    let reports = pairs::batch::generate_corpus(
        documents,
        Arc::new(PunctuationSegmenter::new()),
        parser,
        workers,
    )
    .await;
    data::pair_store::write_pairs(&settings.join_output(&args.output), &reports)
}
