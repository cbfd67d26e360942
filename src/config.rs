//! Runtime configuration utilities for tlink-pairs.

use std::{
    env,
    path::{Path, PathBuf},
    thread,
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Folder holding the annotation XML files.
    pub data_dir: PathBuf,
    /// Folder receiving pair files.
    pub outputs_dir: PathBuf,
    /// Documents processed concurrently.
    pub workers: usize,
    /// Base URL of the CoreNLP-compatible parser server.
    pub corenlp_url: String,
    /// Annotation file names left out of every run.
    pub excluded_files: Vec<String>,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let workers = env::var("PAIRING_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| thread::available_parallelism().map_or(4, |n| n.get()));
        let corenlp_url =
            env::var("CORENLP_URL").unwrap_or_else(|_| "http://localhost:9000".to_string());
        let excluded_files = env::var("EXCLUDED_FILES")
            .map(|v| parse_list(&v))
            .unwrap_or_default();

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            data_dir,
            outputs_dir,
            workers,
            corenlp_url,
            excluded_files,
        })
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
