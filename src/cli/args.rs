use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "ninety")]
#[command(about = "A 90-minute terminal focus timer with randomized breathing breaks")]
#[command(long_about = "ninety - A 90-minute terminal focus timer

Counts down a focus session while interrupting you every few minutes
with a short breathing break: a chime rings, a 10-second countdown runs,
and then you are sent back to work. Focus time and break counts are
tallied per calendar day for the lifetime of the run.

QUICK START:
  ninety run                Start the timer UI
  ninety run -d 45          Focus for 45 minutes instead of 90
  ninety run --mute         No chime
  ninety config init        Write a default config file

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  ninety <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// Applies to 'config show' and the end-of-run summary.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the focus timer UI
    ///
    /// Opens the full-screen timer with two views: Today (countdown,
    /// progress, today's totals) and History (one line per day recorded
    /// this run). Breathing breaks fire at a random interval; by default
    /// between 3 and 5 minutes.
    ///
    /// # Keys
    ///
    ///   s          start the countdown
    ///   p          pause the countdown
    ///   Tab / 1 2  switch between Today and History
    ///   ?          help
    ///   q          quit (prints a session summary)
    ///
    /// # Examples
    ///
    ///   ninety run                    90-minute session
    ///   ninety run -d 45              45-minute session
    ///   ninety run --break-min 60 --break-max 120
    ///   ninety run --seed 7           Deterministic break schedule
    ///   ninety run -o json            JSON summary on exit
    #[command(alias = "r")]
    Run(RunArgs),

    /// Inspect or create the configuration file
    ///
    /// Settings live in ~/.ninety/config.yaml and cover the session
    /// length, the break delay window, and the chime. Command-line flags
    /// always win over the file.
    #[command(alias = "c")]
    Config(ConfigArgs),
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Focus duration in minutes
    #[arg(short, long, env = "NINETY_FOCUS_MINUTES")]
    pub duration: Option<u32>,

    /// Shortest delay before a breathing break, in seconds
    #[arg(long, value_name = "SECS")]
    pub break_min: Option<u32>,

    /// Longest delay before a breathing break, in seconds
    #[arg(long, value_name = "SECS")]
    pub break_max: Option<u32>,

    /// Seed for the break schedule (repeatable runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the break chime
    #[arg(long, env = "NINETY_MUTE")]
    pub mute: bool,

    /// Use a specific config file instead of ~/.ninety/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Use a specific config file instead of ~/.ninety/config.yaml
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
