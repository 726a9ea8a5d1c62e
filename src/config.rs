//! Runtime configuration.
//!
//! Every setting can be given as a command-line flag or through the matching
//! environment variable; flags win.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "export-reestrmkd-50-20251201.csv";
pub const DEFAULT_BIND: &str = "0.0.0.0:10000";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "address-registry")]
#[command(about = "Search and lookup service for the building registry export", long_about = None)]
#[command(version)]
pub struct Config {
    /// Path to the semicolon-delimited registry export
    #[arg(long, env = "REGISTRY_CSV_PATH", default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Address the HTTP server binds to
    #[arg(long, env = "REGISTRY_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log line format
    #[arg(long, env = "REGISTRY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Log filter directive implied by the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
