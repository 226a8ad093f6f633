use crate::mediaorg_core::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Name of the per-directory audit log.
pub const AUDIT_LOG_FILE_NAME: &str = "RenameScript_log.txt";

/// Append-only, human-readable record of what happened to the files of one
/// directory. The file is opened and closed for every line.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// The audit log belonging to `dir`.
    pub fn for_dir(dir: &Path) -> Self {
        AuditLog {
            path: dir.join(AUDIT_LOG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the log left by a previous run, if any.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Removed previous audit log {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one line to the log file, creating it if needed.
    pub fn append(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)?;
        Ok(())
    }

    /// Print a message and append it to the log. A failed log write is
    /// reported but never interrupts processing.
    pub fn record(&self, message: &str) {
        println!("{}", message);
        if let Err(e) = self.append(message) {
            log::warn!(
                "Could not write to audit log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
