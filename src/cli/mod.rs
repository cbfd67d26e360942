//! Command-line interface wiring for tlink-pairs.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod candidates;
pub mod gold;
pub mod union;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Temporal-link pair generation for clinical notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Gold(args) => gold::run(args, settings).await,
            Commands::Candidates(args) => candidates::run(args, settings).await,
            Commands::Union(args) => union::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the gold pairs backed by annotated temporal links.
    Gold(gold::Args),
    /// Generate rule-based candidate pairs.
    Candidates(candidates::Args),
    /// Merge gold and candidate pairs, gold first.
    Union(union::Args),
}

/// Syntax adapter used by the dependency and head-noun rules.
#[derive(Clone, Debug, ValueEnum)]
pub enum ParserKind {
    /// Query a CoreNLP-compatible server at `CORENLP_URL`.
    Corenlp,
    /// Serve pre-computed parses from a CoNLL-U file.
    Conllu,
}
