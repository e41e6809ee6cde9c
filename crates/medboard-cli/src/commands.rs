use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use medboard_runtime::{Config, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui {
        debounce_ms: None,
        discard_stale: false,
    });

    let target = match &command {
        Commands::Tui { .. } => {
            let path = match &cli.log_file {
                Some(path) => path.clone(),
                None => resolve_data_dir(None)?.join("medboard.log"),
            };
            LogTarget::File(path)
        }
        Commands::Call { .. } | Commands::Config => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    match command {
        Commands::Tui {
            debounce_ms,
            discard_stale,
        } => {
            if let Some(ms) = debounce_ms {
                config.debounce_ms = ms;
            }
            if discard_stale {
                config.stale_policy = medboard_engine::StalePolicy::Discard;
            }
            config.validate()?;
            handlers::tui::handle(&config)
        }
        Commands::Call { format, command } => {
            config.validate()?;
            handlers::call::handle(&config, format, command)
        }
        Commands::Config => handlers::config::handle(&config),
    }
}
