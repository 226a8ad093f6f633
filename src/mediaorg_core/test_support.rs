//! In-memory metadata sources for unit tests.

use crate::mediaorg_core::error::{OrganizerError, Result};
use crate::mediaorg_core::metadata::MetadataSource;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Returns the same record for every path.
pub struct StaticSource {
    record: HashMap<String, String>,
    pub queries: usize,
}

impl StaticSource {
    pub fn new(fields: &[(&str, &str)]) -> Self {
        StaticSource {
            record: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            queries: 0,
        }
    }
}

impl MetadataSource for StaticSource {
    fn query(&mut self, _path: &Path, fields: &[&str]) -> Result<HashMap<String, String>> {
        self.queries += 1;
        Ok(self
            .record
            .iter()
            .filter(|(k, _)| fields.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

/// Behaves like a metadata tool that is not installed.
pub struct FailingSource;

impl MetadataSource for FailingSource {
    fn query(&mut self, _path: &Path, _fields: &[&str]) -> Result<HashMap<String, String>> {
        Err(OrganizerError::Exiftool("exiftool: command not found".to_string()))
    }
}

/// Reads `Tag=value` lines from the file itself, so the "metadata" travels
/// with the file through renames and moves.
#[derive(Default)]
pub struct EmbeddedSource {
    pub queries: usize,
}

impl MetadataSource for EmbeddedSource {
    fn query(&mut self, path: &Path, fields: &[&str]) -> Result<HashMap<String, String>> {
        self.queries += 1;
        let contents = fs::read_to_string(path)?;
        Ok(contents
            .lines()
            .filter_map(|line| line.split_once('='))
            .filter(|(k, _)| fields.contains(k))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect())
    }
}

/// Write a fake media file whose embedded metadata is `fields`.
pub fn write_media(path: &Path, fields: &[(&str, &str)]) {
    let body: String = fields
        .iter()
        .map(|(k, v)| format!("{}={}\n", k, v))
        .collect();
    fs::write(path, body).unwrap();
}
