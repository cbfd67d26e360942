//! CLI entry-point for gold pair extraction.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, data, pairs};

/// Args for the `gold` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Annotation folder; defaults to `DATA_DIR`.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output file name inside `OUTPUTS_DIR`.
    #[arg(long, default_value = "gold_pairs.xml")]
    pub output: PathBuf,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let input = args.input.unwrap_or_else(|| settings.data_dir.clone());
    let documents = data::annotation::load_corpus(&input, &settings.excluded_files)?;
    let reports = pairs::gold::corpus_gold_pairs(&documents);
    data::pair_store::write_pairs(&settings.join_output(&args.output), &reports)
}
