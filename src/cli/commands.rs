//! Command implementations.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat, RunArgs};
use crate::config::{Config, Paths};
use crate::core::{BreakDelays, SystemClock};
use crate::engine::FocusEngine;
use crate::error::NinetyError;
use crate::output::{format_summary, to_json};
use crate::sound::Chime;
use crate::tui;

/// Run the timer UI, then return the end-of-run summary.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or the terminal
/// cannot be initialized.
pub fn run(args: RunArgs, format: OutputFormat) -> Result<String, NinetyError> {
    let config = load_config(args.config.as_deref())?;

    let focus_minutes = args.duration.unwrap_or(config.session.focus_minutes);
    let break_min = u64::from(args.break_min.unwrap_or(config.session.break_min_secs));
    let break_max = u64::from(args.break_max.unwrap_or(config.session.break_max_secs));

    let delays = match args.seed {
        Some(seed) => BreakDelays::seeded(seed, break_min, break_max),
        None => BreakDelays::new(break_min, break_max),
    };

    let mut engine = FocusEngine::new(
        i64::from(focus_minutes) * 60,
        delays,
        Box::new(SystemClock),
    );

    let chime = if args.mute || !config.chime.enabled {
        Chime::disabled()
    } else {
        Chime::new(config.chime.volume)
    };

    tui::run(&mut engine, &chime)?;

    format_summary(engine.history(), engine.today(), format)
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, NinetyError> {
    match cmd {
        ConfigCommands::Show { config } => {
            let cfg = load_config(config.as_deref())?;
            match format {
                OutputFormat::Json => to_json(&cfg),
                OutputFormat::Pretty => serde_yaml::to_string(&cfg)
                    .map_err(|e| NinetyError::Config(format!("Failed to serialize config: {e}"))),
            }
        }

        ConfigCommands::Init { force } => {
            let paths = Paths::new()?;
            if paths.config_file.exists() && !force {
                return Err(NinetyError::Config(format!(
                    "{} already exists. Use --force to overwrite.",
                    paths.config_file.display()
                )));
            }

            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;

            Ok(format!(
                "{} Wrote default config to {}",
                "ok:".green().bold(),
                paths.config_file.display()
            ))
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, NinetyError> {
    match path {
        Some(p) => Config::load_from_path(p),
        None => Config::load(),
    }
}
