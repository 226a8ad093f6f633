use crate::mediaorg_core::audit::AuditLog;
use crate::mediaorg_core::error::Result;
use crate::mediaorg_core::metadata::{DateField, MetadataSource, creation_time_or_none};
use crate::mediaorg_core::planner::{archive_destination, renamed_path};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of the rename step for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { path: PathBuf, field: DateField },
    NoDate,
    Failed,
}

impl RenameOutcome {
    /// The file's new path, if it was renamed.
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            RenameOutcome::Renamed { path, .. } => Some(path),
            RenameOutcome::NoDate | RenameOutcome::Failed => None,
        }
    }
}

/// Result of the move step for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(PathBuf),
    /// The destination was already taken; the file stayed where it was.
    AlreadyExists(PathBuf),
    NoDate,
    Failed,
}

/// Rename a file after its creation time, keeping it in its directory.
///
/// A file with the target name is not guarded against: the platform's
/// rename-over-existing behaviour applies.
pub fn rename_by_date(
    source: &mut dyn MetadataSource,
    path: &Path,
    log: &AuditLog,
) -> RenameOutcome {
    let Some(timestamp) = creation_time_or_none(source, path, log) else {
        log.record(&format!(
            "No creation date found: {} left unchanged.",
            path.display()
        ));
        return RenameOutcome::NoDate;
    };

    let result = renamed_path(path, &timestamp).and_then(|new_path| {
        fs::rename(path, &new_path)?;
        Ok(new_path)
    });

    match result {
        Ok(new_path) => {
            log.record(&format!(
                "Renamed: {} -> {} (based on {})",
                path.display(),
                new_path.display(),
                timestamp.field
            ));
            RenameOutcome::Renamed {
                path: new_path,
                field: timestamp.field,
            }
        }
        Err(e) => {
            log::error!("Failed to rename {}: {}", path.display(), e);
            log.record(&format!("Error renaming {}: {}", path.display(), e));
            RenameOutcome::Failed
        }
    }
}

/// Move a (renamed) file into `<archive_root>/<YYYY>/<YYYY-MM>/`.
///
/// Never overwrites: if the destination exists the file is left in place.
pub fn move_by_date(
    source: &mut dyn MetadataSource,
    path: &Path,
    archive_root: &Path,
    log: &AuditLog,
) -> MoveOutcome {
    let Some(timestamp) = creation_time_or_none(source, path, log) else {
        log.record(&format!(
            "No creation date found: {}. File was not moved.",
            path.display()
        ));
        return MoveOutcome::NoDate;
    };

    let destination = match archive_destination(archive_root, path, &timestamp) {
        Ok(destination) => destination,
        Err(e) => {
            log.record(&format!("Error moving {}: {}", path.display(), e));
            return MoveOutcome::Failed;
        }
    };

    if let Some(dir) = destination.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            log::error!("Failed to create {}: {}", dir.display(), e);
            log.record(&format!(
                "Error moving {}: cannot create {}: {}",
                path.display(),
                dir.display(),
                e
            ));
            return MoveOutcome::Failed;
        }
    }

    if destination.exists() {
        log.record(&format!(
            "File already exists: {}. File was not moved.",
            destination.display()
        ));
        return MoveOutcome::AlreadyExists(destination);
    }

    match move_file(path, &destination) {
        Ok(()) => {
            log.record(&format!(
                "Moved: {} -> {}",
                path.display(),
                destination.display()
            ));
            MoveOutcome::Moved(destination)
        }
        Err(e) => {
            log::error!(
                "Failed to move {} to {}: {}",
                path.display(),
                destination.display(),
                e
            );
            log.record(&format!("Error moving {}: {}", path.display(), e));
            MoveOutcome::Failed
        }
    }
}

/// Rename, falling back to copy and delete when the destination is on
/// another filesystem.
fn move_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} and {} are on different devices, copying instead",
                from.display(),
                to.display()
            );
            copy_then_remove(from, to)
        }
        Err(e) => Err(e.into()),
    }
}

/// Copy `from` to the unused path `to`, then delete `from`. On failure no
/// file is left at `to`, so a later run does not mistake a partial copy for
/// an archived file.
fn copy_then_remove(from: &Path, to: &Path) -> Result<()> {
    if let Err(e) = fs::copy(from, to) {
        let _ = fs::remove_file(to);
        return Err(e.into());
    }
    if let Err(e) = fs::remove_file(from) {
        // Do not leave two copies behind.
        let _ = fs::remove_file(to);
        return Err(e.into());
    }
    Ok(())
}
