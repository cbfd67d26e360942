//! Loader for i2b2-style temporal annotation XML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use quick_xml::de::from_str;
use regex::Regex;
use serde::Deserialize;
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::data::document::{Document, Event, TemporalLink};

/// List the `*.xml` annotation files directly inside `dir`, sorted by name,
/// skipping any file whose name appears in `excluded`.
pub fn list_annotation_files(dir: &Path, excluded: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("list {dir:?}"))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some("xml")
        {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if excluded.iter().any(|skip| skip == name.as_ref()) {
            info!(file = %name, "skipping excluded annotation file");
            continue;
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}

/// Load every annotation file in `dir`. Files that fail to load are logged
/// and left out; they never abort the corpus.
pub fn load_corpus(dir: &Path, excluded: &[String]) -> Result<Vec<Document>> {
    let files = list_annotation_files(dir, excluded)?;
    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        match load_document(path) {
            Ok(doc) => documents.push(doc),
            Err(err) => error!(
                path = %path.display(),
                error = %format!("{err:#}"),
                "failed to load annotations"
            ),
        }
    }
    info!(dir = %dir.display(), files = files.len(), loaded = documents.len(), "loaded corpus");
    Ok(documents)
}

/// Load one annotation file.
pub fn load_document(path: &Path) -> Result<Document> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_document(&filename, &raw).with_context(|| format!("parse {path:?}"))
}

/// Parse annotation XML already held in memory.
pub fn parse_document(filename: &str, xml: &str) -> Result<Document> {
    let file: AnnotationFile = from_str(&escape_stray_ampersands(xml))?;
    let tags = file.tags;

    let section_times: Vec<&str> = tags.sectimes.iter().map(|s| s.text.as_str()).collect();

    let events = tags.events.iter().map(|e| Event::event(&e.id, &e.text, e.start, e.end));
    let timexes = tags.timexes.iter().map(|t| {
        let timex = Event::timex(&t.id, &t.text, t.start, t.end);
        if section_times.contains(&t.text.as_str()) {
            timex.section_time()
        } else {
            timex
        }
    });
    let all_events: Vec<Event> = events.chain(timexes).collect();

    let links = tags
        .tlinks
        .into_iter()
        .map(|l| TemporalLink {
            id: l.id,
            from_id: l.from_id,
            to_id: l.to_id,
        })
        .collect();

    let document = Document::new(filename, normalise_text(&file.text), all_events, links);
    if document.events.len() != tags.events.len() + tags.timexes.len() {
        warn!(file = %filename, "duplicate event ids in annotations; later spans win");
    }
    Ok(document)
}

/// Newlines become spaces and trailing whitespace is dropped; leading text is
/// kept as-is so annotation offsets still line up.
fn normalise_text(text: &str) -> String {
    text.replace('\n', " ").trim_end().to_string()
}

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#x[0-9A-Fa-f]+);").expect("valid regex")
});

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Escape `&` characters that do not start an XML entity. CDATA sections are
/// copied verbatim.
fn escape_stray_ampersands(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len());
    let mut rest = xml;
    while let Some(pos) = rest.find(|c: char| c == '&' || c == '<') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        if rest.starts_with(CDATA_OPEN) {
            let end = rest
                .find(CDATA_CLOSE)
                .map(|i| i + CDATA_CLOSE.len())
                .unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
        } else if rest.starts_with('&') && !ENTITY.is_match(rest) {
            out.push_str("&amp;");
            rest = &rest[1..];
        } else {
            out.push_str(&rest[..1]);
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Deserialize)]
struct AnnotationFile {
    #[serde(rename = "TEXT")]
    text: String,
    #[serde(rename = "TAGS", default)]
    tags: Tags,
}

#[derive(Debug, Default, Deserialize)]
struct Tags {
    #[serde(rename = "EVENT", default)]
    events: Vec<SpanTag>,
    #[serde(rename = "TIMEX3", default)]
    timexes: Vec<SpanTag>,
    #[serde(rename = "SECTIME", default)]
    sectimes: Vec<SectimeTag>,
    #[serde(rename = "TLINK", default)]
    tlinks: Vec<LinkTag>,
}

#[derive(Debug, Deserialize)]
struct SpanTag {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@start")]
    start: usize,
    #[serde(rename = "@end")]
    end: usize,
    #[serde(rename = "@text")]
    text: String,
}

#[derive(Debug, Deserialize)]
struct SectimeTag {
    #[serde(rename = "@text")]
    text: String,
}

#[derive(Debug, Deserialize)]
struct LinkTag {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@fromID")]
    from_id: String,
    #[serde(rename = "@toID")]
    to_id: String,
}
