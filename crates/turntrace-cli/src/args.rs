use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "turntrace")]
#[command(about = "Reconstruct turns and tool-call steps from agent session logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/turntrace/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Longest accepted log line in bytes
    #[arg(long, global = true)]
    pub max_line_bytes: Option<usize>,

    /// Output format (overrides the config file)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the turns reconstructed from a session log
    Turns {
        /// Session log (JSONL)
        file: PathBuf,
    },

    /// Find the turn position of one tool invocation
    Locate {
        /// Session log (JSONL)
        file: PathBuf,

        /// Tool invocation identifier
        tool_use_id: String,
    },

    /// Aggregate turn-length statistics over one or more session logs
    Stats {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
