use crate::mediaorg_core::audit::AuditLog;
use crate::mediaorg_core::error::{OrganizerError, Result};
use exiftool::ExifTool;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use time::PrimitiveDateTime;

/// Date format used by metadata date fields.
const METADATA_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// A metadata attribute that may carry the capture time of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    CreateDate,
    DateTimeOriginal,
    MediaCreateDate,
    TrackCreateDate,
}

impl DateField {
    /// Fields in the order they are tried. The first one present wins.
    pub const PRIORITY: [DateField; 4] = [
        DateField::CreateDate,
        DateField::DateTimeOriginal,
        DateField::MediaCreateDate,
        DateField::TrackCreateDate,
    ];

    /// Tag name as reported by exiftool.
    pub fn tag(&self) -> &'static str {
        match self {
            DateField::CreateDate => "CreateDate",
            DateField::DateTimeOriginal => "DateTimeOriginal",
            DateField::MediaCreateDate => "MediaCreateDate",
            DateField::TrackCreateDate => "TrackCreateDate",
        }
    }

    pub fn priority_tags() -> [&'static str; 4] {
        Self::PRIORITY.map(|field| field.tag())
    }
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Capture time of a file together with the field it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationTimestamp {
    pub value: PrimitiveDateTime,
    pub field: DateField,
}

impl CreationTimestamp {
    /// Parse a `YYYY:MM:DD HH:MM:SS` value read from `field`.
    pub fn parse(field: DateField, raw: &str) -> Result<Self> {
        let value = PrimitiveDateTime::parse(raw, METADATA_DATE_FORMAT).map_err(|e| {
            OrganizerError::InvalidDateFormat {
                field: field.tag(),
                value: raw.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(CreationTimestamp { value, field })
    }
}

/// Something that can read named metadata fields of a file.
pub trait MetadataSource {
    /// Return the requested fields that are present on `path`, by tag name.
    fn query(&mut self, path: &Path, fields: &[&str]) -> Result<HashMap<String, String>>;
}

/// One JSON record as printed by `exiftool -json`.
#[derive(Deserialize, Debug, Default)]
struct ExifRecord {
    #[serde(rename = "SourceFile", default)]
    source_file: Option<String>,
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

/// A helper process started on first use. After a failed request the
/// instance is dropped, so the next request runs against a new one.
struct LazyProcess<T, F> {
    start: F,
    running: Option<T>,
}

impl<T, F> LazyProcess<T, F>
where
    F: FnMut() -> Result<T>,
{
    fn new(start: F) -> Self {
        LazyProcess {
            start,
            running: None,
        }
    }

    fn request<R>(&mut self, f: impl FnOnce(&mut T) -> Result<R>) -> Result<R> {
        let mut process = match self.running.take() {
            Some(process) => process,
            None => (self.start)()?,
        };
        let result = f(&mut process);
        if result.is_ok() {
            self.running = Some(process);
        }
        result
    }

    fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

fn start_exiftool() -> Result<ExifTool> {
    ExifTool::new().map_err(|e| OrganizerError::Exiftool(e.to_string()))
}

/// Command line arguments selecting `fields` (`-CreateDate`, ...).
fn field_args(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|field| format!("-{}", field)).collect()
}

/// Metadata source backed by a long-running exiftool process.
///
/// The process is started on the first query. A failed query, including a
/// failed start, discards the process and the next query starts a new one.
pub struct ExifToolSource {
    exiftool: LazyProcess<ExifTool, fn() -> Result<ExifTool>>,
}

impl ExifToolSource {
    pub fn new() -> Self {
        ExifToolSource {
            exiftool: LazyProcess::new(start_exiftool as fn() -> Result<ExifTool>),
        }
    }
}

impl Default for ExifToolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for ExifToolSource {
    fn query(&mut self, path: &Path, fields: &[&str]) -> Result<HashMap<String, String>> {
        let args = field_args(fields);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let record: ExifRecord = self.exiftool.request(|exiftool| {
            exiftool.read_metadata(path, &args).map_err(|e| {
                log::debug!("Discarding exiftool process after error: {}", e);
                OrganizerError::MetadataExtraction {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })
        })?;

        log::debug!(
            "exiftool record for {}: {:?}",
            record.source_file.as_deref().unwrap_or("?"),
            record.fields
        );

        Ok(string_fields(record.fields, fields))
    }
}

/// Keep the requested fields that carry a string value.
fn string_fields(record: HashMap<String, Value>, wanted: &[&str]) -> HashMap<String, String> {
    record
        .into_iter()
        .filter(|(key, _)| wanted.contains(&key.as_str()))
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            other => {
                log::debug!("Ignoring non-text value for {}: {}", key, other);
                None
            }
        })
        .collect()
}

/// Determine the creation time of a file from its metadata.
///
/// Issues one query per call. Returns `Ok(None)` when none of the date
/// fields is present, and an error when the source fails or the winning
/// field does not hold a valid date.
pub fn extract_creation_time(
    source: &mut dyn MetadataSource,
    path: &Path,
) -> Result<Option<CreationTimestamp>> {
    let tags = DateField::priority_tags();
    let record = source.query(path, &tags)?;

    for field in DateField::PRIORITY {
        if let Some(raw) = record.get(field.tag()) {
            let timestamp = CreationTimestamp::parse(field, raw)?;
            log::debug!(
                "{}: creation time {} from {}",
                path.display(),
                raw,
                field
            );
            return Ok(Some(timestamp));
        }
    }

    log::debug!("{}: no date field present", path.display());
    Ok(None)
}

/// Like [`extract_creation_time`], but failures are reported and treated as
/// "no date found".
pub fn creation_time_or_none(
    source: &mut dyn MetadataSource,
    path: &Path,
    log: &AuditLog,
) -> Option<CreationTimestamp> {
    match extract_creation_time(source, path) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            log::warn!("Could not read creation date of {}: {}", path.display(), e);
            log.record(&format!(
                "Error reading creation date of {}: {}",
                path.display(),
                e
            ));
            None
        }
    }
}

/// Check if exiftool is available on the system.
pub fn exiftool_available() -> bool {
    std::process::Command::new("exiftool")
        .arg("-ver")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
