pub mod check;
pub mod classify;
pub mod watch;

use std::path::PathBuf;
use std::time::Duration;

use asvscope_common::config::{Config, DEFAULT_DEBOUNCE};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asvscope")]
#[command(about = "Classify and validate ASV scan targets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output (-q drops decorations, -qq prints only the verdict)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Accept any token starting with ':' as an IPv6 literal
    #[arg(long, global = true)]
    pub legacy_bare_port: bool,

    /// Quiet window for `watch`, in milliseconds
    #[arg(
        long,
        global = true,
        env = "ASVSCOPE_DEBOUNCE_MS",
        default_value_t = DEFAULT_DEBOUNCE.as_millis() as u64
    )]
    pub debounce_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a target list before submission
    #[command(alias = "c")]
    Check {
        /// Targets separated by commas, semicolons or whitespace
        entries: Vec<String>,
        /// Read targets from a file instead
        #[arg(short, long, conflicts_with = "entries")]
        file: Option<PathBuf>,
    },
    /// Classify a single target
    #[command(alias = "k")]
    Classify { token: String },
    /// Treat each stdin line as a live search field and report settled values
    #[command(alias = "w")]
    Watch,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            debounce: Duration::from_millis(self.debounce_ms),
            legacy_bare_port: self.legacy_bare_port,
            quiet: self.quiet,
            json: self.json,
        }
    }
}
