use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Packs every order of an instance with the shelf and the random heuristic,
/// then reports the wasted space.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance with the orders to pack
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the report and drawings to, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON configuration, defaults are used if not provided
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the PRNG seed of the configuration
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
