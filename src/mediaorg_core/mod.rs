pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod metadata;
pub mod organize;
pub mod planner;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use audit::{AUDIT_LOG_FILE_NAME, AuditLog};
pub use cli::{Cli, HELP_TEXT, parse_args, wants_help};
pub use config::RunConfig;
pub use error::OrganizerError;
pub use media::{MediaKind, classify, is_media_file};
pub use metadata::{
    CreationTimestamp, DateField, ExifToolSource, MetadataSource, exiftool_available,
    extract_creation_time,
};
pub use organize::{MoveOutcome, RenameOutcome, move_by_date, rename_by_date};
pub use walker::{RunStats, process_media};
