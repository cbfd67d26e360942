//! CLI entry-point for merging gold and candidate pairs.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, data::pair_store, pairs::union};

/// Args for the `union` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Gold pairs file; relative paths resolve inside `OUTPUTS_DIR`.
    #[arg(long, default_value = "gold_pairs.xml")]
    pub gold: PathBuf,
    /// Candidate pairs file; relative paths resolve inside `OUTPUTS_DIR`.
    #[arg(long, default_value = "candidate_pairs.xml")]
    pub candidates: PathBuf,
    /// Output file name inside `OUTPUTS_DIR`.
    #[arg(long, default_value = "gold_and_candidate_pairs.xml")]
    pub output: PathBuf,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let gold = pair_store::read_pairs(&settings.join_output(&args.gold))?;
    let candidates = pair_store::read_pairs(&settings.join_output(&args.candidates))?;

    let gold_total: usize = gold.iter().map(|r| r.pairs.len()).sum();
    let covered: usize = gold
        .iter()
        .map(|g| {
            candidates
                .iter()
                .find(|c| c.filename == g.filename)
                .map_or(0, |c| union::coverage(&g.pairs, &c.pairs))
        })
        .sum();
    info!(
        gold = gold_total,
        covered,
        recall = covered as f64 / gold_total.max(1) as f64,
        "candidate coverage of gold pairs"
    );

    let merged = union::union_reports(&gold, &candidates);
    pair_store::write_pairs(&settings.join_output(&args.output), &merged)
}
