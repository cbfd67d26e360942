//! `<Pairs>` XML persistence for gold, candidate and union pair sets.

use std::{fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use quick_xml::{de::from_str, se::to_string};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::pairs::pair::{DocumentPairs, Endpoint, Pair};

/// Write one `<Report>` per document. `tlinkID` is written for gold pairs only.
pub fn write_pairs(path: &Path, reports: &[DocumentPairs]) -> Result<()> {
    let xml = to_xml(reports)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path).with_context(|| format!("create {path:?}"))?;
    file.write_all(xml.as_bytes())?;
    let pairs: usize = reports.iter().map(|r| r.pairs.len()).sum();
    info!(path = %path.display(), reports = reports.len(), pairs, "saved pairs");
    Ok(())
}

/// Read a pairs file back, in file order.
pub fn read_pairs(path: &Path) -> Result<Vec<DocumentPairs>> {
    let xml = std::fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;
    from_xml(&xml).with_context(|| format!("parse {path:?}"))
}

pub fn to_xml(reports: &[DocumentPairs]) -> Result<String> {
    let file = PairsFile {
        reports: reports.iter().map(ReportRecord::from).collect(),
    };
    Ok(to_string(&file)?)
}

pub fn from_xml(xml: &str) -> Result<Vec<DocumentPairs>> {
    let file: PairsFile = from_str(xml)?;
    Ok(file.reports.into_iter().map(DocumentPairs::from).collect())
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "Pairs")]
struct PairsFile {
    #[serde(rename = "Report", default)]
    reports: Vec<ReportRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReportRecord {
    #[serde(rename = "@filename")]
    filename: String,
    #[serde(rename = "Pair", default)]
    pairs: Vec<PairRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PairRecord {
    #[serde(rename = "@char_span_start")]
    char_span_start: usize,
    #[serde(rename = "@char_span_end")]
    char_span_end: usize,
    #[serde(rename = "@tlinkID", default, skip_serializing_if = "Option::is_none")]
    tlink_id: Option<String>,
    #[serde(rename = "@fromID")]
    from_id: String,
    #[serde(rename = "@fromText")]
    from_text: String,
    #[serde(rename = "@fromStart")]
    from_start: usize,
    #[serde(rename = "@fromEnd")]
    from_end: usize,
    #[serde(rename = "@toID")]
    to_id: String,
    #[serde(rename = "@toText")]
    to_text: String,
    #[serde(rename = "@toStart")]
    to_start: usize,
    #[serde(rename = "@toEnd")]
    to_end: usize,
}

impl From<&DocumentPairs> for ReportRecord {
    fn from(report: &DocumentPairs) -> Self {
        Self {
            filename: report.filename.clone(),
            pairs: report.pairs.iter().map(PairRecord::from).collect(),
        }
    }
}

impl From<ReportRecord> for DocumentPairs {
    fn from(record: ReportRecord) -> Self {
        DocumentPairs::new(
            record.filename,
            record.pairs.into_iter().map(Pair::from).collect(),
        )
    }
}

impl From<&Pair> for PairRecord {
    fn from(pair: &Pair) -> Self {
        Self {
            char_span_start: pair.span_start,
            char_span_end: pair.span_end,
            tlink_id: pair.link_id.clone(),
            from_id: pair.from.id.clone(),
            from_text: pair.from.text.clone(),
            from_start: pair.from.start,
            from_end: pair.from.end,
            to_id: pair.to.id.clone(),
            to_text: pair.to.text.clone(),
            to_start: pair.to.start,
            to_end: pair.to.end,
        }
    }
}

/// The section-time flag is not persisted; reloaded pairs carry `false`.
impl From<PairRecord> for Pair {
    fn from(record: PairRecord) -> Self {
        Pair {
            span_start: record.char_span_start,
            span_end: record.char_span_end,
            from: Endpoint {
                id: record.from_id,
                text: record.from_text,
                start: record.from_start,
                end: record.from_end,
            },
            to: Endpoint {
                id: record.to_id,
                text: record.to_text,
                start: record.to_start,
                end: record.to_end,
            },
            is_section_time: false,
            link_id: record.tlink_id,
        }
    }
}
