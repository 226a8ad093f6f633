use anyhow::Result;
use clap::error::ErrorKind;
use mediaorg::mediaorg_core::{
    ExifToolSource, HELP_TEXT, RunConfig, exiftool_available, parse_args, process_media,
    wants_help,
};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;
use std::process::exit;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Help wins over everything else on the command line
    if wants_help(&args) {
        println!("{}", HELP_TEXT);
        return Ok(());
    }

    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{}", e);
            return Ok(());
        }
        Err(e) => {
            print!("{}", e);
            println!("Use -help for more information.");
            exit(1);
        }
    };

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("mediaorg.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let config = match RunConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            exit(1);
        }
    };

    if !exiftool_available() {
        log::warn!("exiftool is not installed or not in PATH; no creation dates can be read");
    }

    let mut source = ExifToolSource::new();
    let stats = process_media(&mut source, &config);

    println!("\nDone!");
    println!("  {} files processed", stats.files_seen);
    println!("  {} renamed", stats.renamed);
    if config.move_target().is_some() {
        println!("  {} moved", stats.moved);
        if stats.already_exists > 0 {
            println!("  {} already in archive, not moved", stats.already_exists);
        }
    }
    if stats.no_date > 0 {
        println!("  {} without creation date", stats.no_date);
    }
    if stats.failed > 0 {
        println!("  {} errors", stats.failed);
    }

    Ok(())
}
