//! Target names and locations derived from a creation timestamp.

use crate::mediaorg_core::error::{OrganizerError, Result};
use crate::mediaorg_core::metadata::CreationTimestamp;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name format for renamed media (YYYY-MM-DD_HH-MM-SS).
pub const FILE_NAME_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");

/// Year directory of the archive (YYYY).
pub const YEAR_DIR_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]");

/// Month directory of the archive (YYYY-MM).
pub const MONTH_DIR_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]-[month]");

/// The new file name for `path`: the formatted timestamp followed by the
/// original extension, case preserved.
pub fn renamed_file_name(path: &Path, timestamp: &CreationTimestamp) -> Result<OsString> {
    let mut name = OsString::from(timestamp.value.format(FILE_NAME_DATE_FORMAT)?);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(name)
}

/// The renamed path: same parent directory, new file name.
pub fn renamed_path(path: &Path, timestamp: &CreationTimestamp) -> Result<PathBuf> {
    let name = renamed_file_name(path, timestamp)?;
    Ok(match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    })
}

/// Archive directory for a timestamp: `<root>/<YYYY>/<YYYY-MM>`.
pub fn archive_dir(archive_root: &Path, timestamp: &CreationTimestamp) -> Result<PathBuf> {
    Ok(archive_root
        .join(timestamp.value.format(YEAR_DIR_FORMAT)?)
        .join(timestamp.value.format(MONTH_DIR_FORMAT)?))
}

/// Where `path` lands inside the archive. The file name is kept as is.
pub fn archive_destination(
    archive_root: &Path,
    path: &Path,
    timestamp: &CreationTimestamp,
) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| OrganizerError::NoFileName(path.to_path_buf()))?;
    Ok(archive_dir(archive_root, timestamp)?.join(file_name))
}
