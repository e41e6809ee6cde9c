mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medboard")]
#[command(about = "Terminal dashboard for a patient records API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "API root URL (overrides MEDBOARD_URL and the config file)")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Log file for the interactive dashboard")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
