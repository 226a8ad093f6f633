use crate::mediaorg_core::audit::AuditLog;
use crate::mediaorg_core::config::RunConfig;
use crate::mediaorg_core::error::OrganizerError;
use crate::mediaorg_core::media::is_media_file;
use crate::mediaorg_core::metadata::MetadataSource;
use crate::mediaorg_core::organize::{MoveOutcome, RenameOutcome, move_by_date, rename_by_date};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counters for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub directories: usize,
    pub files_seen: usize,
    pub renamed: usize,
    pub moved: usize,
    pub already_exists: usize,
    pub no_date: usize,
    pub failed: usize,
}

impl RunStats {
    fn record_rename(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::NoDate => self.no_date += 1,
            RenameOutcome::Failed => self.failed += 1,
        }
    }

    fn record_move(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Moved(_) => self.moved += 1,
            MoveOutcome::AlreadyExists(_) => self.already_exists += 1,
            MoveOutcome::NoDate => self.no_date += 1,
            MoveOutcome::Failed => self.failed += 1,
        }
    }
}

/// Process the source directory of `config`, flat or recursively.
pub fn process_media(source: &mut dyn MetadataSource, config: &RunConfig) -> RunStats {
    let mut stats = RunStats::default();
    let archive_root = config.move_target();

    if config.recursive {
        for entry in WalkDir::new(&config.source_dir).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    process_directory(source, entry.path(), archive_root, &mut stats);
                }
                Ok(_) => {}
                Err(e) => {
                    let e = OrganizerError::from(e);
                    log::warn!("Skipping unreadable entry: {}", e);
                    println!("Error while walking {}: {}", config.source_dir.display(), e);
                    stats.failed += 1;
                }
            }
        }
    } else {
        process_directory(source, &config.source_dir, archive_root, &mut stats);
    }

    log::info!("Run finished: {:?}", stats);
    stats
}

/// Process the media files directly inside `dir`, starting a fresh audit log.
pub fn process_directory(
    source: &mut dyn MetadataSource,
    dir: &Path,
    archive_root: Option<&Path>,
    stats: &mut RunStats,
) {
    println!("Processing directory: {}", dir.display());
    stats.directories += 1;

    let log = AuditLog::for_dir(dir);
    if let Err(e) = log.reset() {
        log::warn!("Could not remove {}: {}", log.path().display(), e);
    }

    let files = match media_files_in(dir) {
        Ok(files) => files,
        Err(e) => {
            log::error!("Failed to list {}: {}", dir.display(), e);
            log.record(&format!("Error reading directory {}: {}", dir.display(), e));
            stats.failed += 1;
            return;
        }
    };

    for path in files {
        process_file(source, &path, archive_root, &log, stats);
    }
}

/// Rename one file and, if an archive root is given, move it there.
pub fn process_file(
    source: &mut dyn MetadataSource,
    path: &Path,
    archive_root: Option<&Path>,
    log: &AuditLog,
    stats: &mut RunStats,
) {
    println!("Processing file: {}", path.display());
    stats.files_seen += 1;

    let outcome = rename_by_date(source, path, log);
    stats.record_rename(&outcome);

    if let (Some(renamed), Some(archive_root)) = (outcome.into_path(), archive_root) {
        let outcome = move_by_date(source, &renamed, archive_root, log);
        stats.record_move(&outcome);
    }
}

/// Regular files with a supported extension directly inside `dir`, sorted
/// by name.
pub fn media_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_media_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
