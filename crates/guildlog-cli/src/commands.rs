use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::sources::{load_catalog, read_raw_logs};
use anyhow::Result;
use guildlog_engine::MissingNamePolicy;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            logs,
            items,
            upgrades,
            on_missing_name,
        } => {
            // Flags override the config file
            let items_path = items.or_else(|| config.items_path());
            let upgrades_path = upgrades.or_else(|| config.upgrades_path());
            let policy = on_missing_name
                .map(MissingNamePolicy::from)
                .unwrap_or(config.names.on_missing_name);

            let raw = read_raw_logs(logs.as_deref())?;
            let items = load_catalog(items_path.as_deref())?;
            let upgrades = load_catalog(upgrades_path.as_deref())?;

            handlers::render::handle(&raw, &items, &upgrades, policy, cli.format)
        }

        Commands::Refs { logs } => {
            let raw = read_raw_logs(logs.as_deref())?;
            handlers::refs::handle(&raw, cli.format)
        }

        Commands::Check { logs } => {
            let raw = read_raw_logs(logs.as_deref())?;
            handlers::check::handle(&raw, cli.format)
        }
    }
}
