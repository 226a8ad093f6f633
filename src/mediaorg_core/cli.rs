use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Usage text printed for `-help`.
pub const HELP_TEXT: &str = "\
Usage:

    mediaorg <source_dir> [options]

Options:
    -move <target_dir>  : Rename the files in the source directory, then move them
                          into a <year>/<year>-<month> structure below the target directory.
    -rename             : Only rename the files in the source directory, do not move them.
    -r                  : Process the source directory recursively (including all subdirectories).
    -help               : Show this help message.

    --log               : Also write diagnostic output to mediaorg.log.
    --log-level <level> : Level for mediaorg.log (error, warn, info, debug, trace).

Examples:
    1. Only rename the files in the source directory:
       mediaorg /path/to/source_directory -rename

    2. Recursively rename the files and move them into the target directory:
       mediaorg /path/to/source_directory -move /path/to/target_directory -r
";

/// Single-dash long options and their clap spelling.
const LEGACY_OPTIONS: &[(&str, &str)] = &[
    ("-move", "--move"),
    ("-rename", "--rename"),
    ("-help", "--help"),
];

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rename photos and videos after their capture time and file them by year and month"
)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Directory containing the media to organize
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Move renamed files into <TARGET_DIR>/<year>/<year>-<month>
    #[arg(long = "move", value_name = "TARGET_DIR")]
    pub move_to: Option<PathBuf>,

    /// Only rename, never move
    #[arg(long = "rename")]
    pub rename_only: bool,

    /// Process subdirectories too
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Enable file logging to mediaorg.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

/// Rewrite single-dash long options (`-move`) to the form clap expects.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            LEGACY_OPTIONS
                .iter()
                .find(|(legacy, _)| *legacy == arg)
                .map(|(_, long)| long.to_string())
                .unwrap_or(arg)
        })
        .collect()
}

/// Whether help was requested anywhere on the command line. Help wins over
/// every other argument, valid or not.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| arg == "-help" || arg == "--help")
}

/// Parse a raw argument list, accepting the single-dash spellings.
pub fn parse_args<I, S>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Cli::try_parse_from(normalize_args(args))
}
