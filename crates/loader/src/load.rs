use crate::error::{LoaderError, Result};
use sectionmatch_matcher::{Document, TopicEntry};
use std::fs;
use std::path::Path;

/// Load and normalize the topic specification: a JSON array of entries.
///
/// Missing `data`/`questions`/`Possible sections` keys default to empty at
/// parse time, so downstream code never sees absent fields.
pub fn load_topic_spec(path: &Path) -> Result<Vec<TopicEntry>> {
    let raw = read(path)?;
    let entries: Vec<TopicEntry> = parse(path, &raw)?;
    log::debug!("Loaded {} topic entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Load one document input. A missing `sections` field parses to an empty
/// section map.
pub fn load_document(path: &Path) -> Result<Document> {
    let raw = read(path)?;
    let document: Document = parse(path, &raw)?;
    log::debug!(
        "Loaded document {} with {} sections",
        path.display(),
        document.sections.len()
    );
    Ok(document)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| LoaderError::Json {
        path: path.to_path_buf(),
        source,
    })
}
