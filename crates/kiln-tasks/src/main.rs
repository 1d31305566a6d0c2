mod cli;
mod tasks;

use anyhow::Result;
use clap::Parser;
use kiln_engine::logging::{init_logging, LoggingConfig};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let config = cli.runtime_config();
    log::info!("running task '{}' ({:?})", cli.task.name(), config.pacing);

    tasks::run(cli.task, config)
}
