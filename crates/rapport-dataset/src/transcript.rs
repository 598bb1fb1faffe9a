//! Transcript directory extraction.
//!
//! Every `*.txt` file in a directory is read in filename order. Lines
//! starting with `D:` or `P:` become labeled records; everything else is
//! skipped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::label::{Speaker, label_dialogue};

/// One labeled utterance in the output dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub text: String,
    pub speaker: Speaker,
    pub label: u8,
}

/// Parse one transcript's contents into records.
pub fn parse_transcript(contents: &str) -> Vec<DialogueRecord> {
    contents
        .lines()
        .filter_map(|line| {
            [Speaker::Doctor, Speaker::Patient]
                .into_iter()
                .find_map(|speaker| {
                    line.strip_prefix(speaker.prefix())
                        .map(|rest| (speaker, rest.trim()))
                })
        })
        .map(|(speaker, text)| DialogueRecord {
            text: text.to_string(),
            speaker,
            label: label_dialogue(speaker, text),
        })
        .collect()
}

/// Decode transcript bytes: UTF-8 when valid, ISO-8859-1 otherwise.
pub fn decode_transcript(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// List `*.txt` files in `dir`, sorted by path.
pub fn transcript_files(dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let read_err = |source: std::io::Error| DatasetError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Extract and label every transcript in `dir`.
pub fn extract_directory(dir: &Path) -> Result<Vec<DialogueRecord>, DatasetError> {
    let mut dataset = Vec::new();

    for path in transcript_files(dir)? {
        let bytes = fs::read(&path).map_err(|source| DatasetError::Read {
            path: path.clone(),
            source,
        })?;
        let records = parse_transcript(&decode_transcript(bytes));
        tracing::debug!(path = %path.display(), records = records.len(), "parsed transcript");
        dataset.extend(records);
    }

    Ok(dataset)
}

/// Serialize records as a JSON array indented by four spaces.
pub fn to_json(records: &[DialogueRecord]) -> Result<String, DatasetError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_dataset(records: &[DialogueRecord], output: &Path) -> Result<(), DatasetError> {
    let json = to_json(records)?;
    fs::write(output, json).map_err(|source| DatasetError::Write {
        path: output.to_path_buf(),
        source,
    })
}
