use crate::mediaorg_core::cli::Cli;
use crate::mediaorg_core::error::{OrganizerError, Result};
use std::path::{Path, PathBuf};

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source_dir: PathBuf,
    pub archive_root: Option<PathBuf>,
    pub rename_only: bool,
    pub recursive: bool,
}

impl RunConfig {
    /// Check the parsed command line. Every error here aborts the run
    /// before any file is touched.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source_dir = cli.source_dir.clone().ok_or_else(|| {
            OrganizerError::Argument(
                "A source directory is required. Use -help for more information.".to_string(),
            )
        })?;

        if !source_dir.is_dir() {
            return Err(OrganizerError::NotADirectory {
                role: "source",
                path: source_dir,
            });
        }

        if let Some(target) = &cli.move_to {
            if !target.is_dir() {
                return Err(OrganizerError::NotADirectory {
                    role: "target",
                    path: target.clone(),
                });
            }
        }

        if cli.move_to.is_some() && cli.rename_only {
            return Err(OrganizerError::Argument(
                "The options '-move' and '-rename' cannot be used together.".to_string(),
            ));
        }

        Ok(RunConfig {
            source_dir,
            archive_root: cli.move_to.clone(),
            rename_only: cli.rename_only,
            recursive: cli.recursive,
        })
    }

    /// Archive root for the move step, if files should be moved at all.
    pub fn move_target(&self) -> Option<&Path> {
        if self.rename_only {
            None
        } else {
            self.archive_root.as_deref()
        }
    }
}
