//! board - task board command-line client
//!
//! Loads a project board from the REST backend and applies moves through the
//! same synchronizer an interactive board would use.
//!
//! # Examples
//!
//! ```bash
//! # Print the board of project 7
//! board show 7 --pretty
//!
//! # Only the tasks assigned to user 3
//! board show 7 --mine 3
//!
//! # Move task 42 from the top of list 1 to the second slot of list 2
//! board move 7 42 --from 1:0 --to 2:1
//! ```

use board_cli::{Cli, CliResult, logger, run};
use board_config::Config;
use board_sync::{BoardSynchronizer, Client, SyncOptions};

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<String> {
    // Explicit flags > environment > config.toml > defaults
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    if let Some(token) = cli.token {
        config.api.token = Some(token);
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting board v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let client = Client::from_config(&config.api)?;
    let sync = BoardSynchronizer::new(client, SyncOptions::from(&config.sync));

    let value = run(&sync, cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}
