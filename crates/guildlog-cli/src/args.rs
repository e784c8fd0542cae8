use crate::types::{LogLevel, MissingName, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guildlog")]
#[command(about = "Render guild audit logs as readable text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $GUILDLOG_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every log entry as one line of text
    Render {
        /// Guild log JSON document; `-` or omitted reads stdin
        #[arg(long)]
        logs: Option<PathBuf>,

        /// Item name catalog
        #[arg(long)]
        items: Option<PathBuf>,

        /// Upgrade name catalog
        #[arg(long)]
        upgrades: Option<PathBuf>,

        #[arg(long)]
        on_missing_name: Option<MissingName>,
    },

    /// List the item and upgrade ids a log batch needs names for
    Refs {
        #[arg(long)]
        logs: Option<PathBuf>,
    },

    /// Decode a log batch and count entries per kind
    Check {
        #[arg(long)]
        logs: Option<PathBuf>,
    },
}
